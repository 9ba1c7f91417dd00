//! Cart context extractor.
//!
//! Components that show cart state take a [`CartContext`] explicitly; it is
//! loaded from the visitor's session once per request.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use solestyle_core::Cart;
use tower_sessions::Session;

use crate::models::session_keys;

/// Target of the open-cart action (HTMX fragment).
pub const OPEN_CART_HREF: &str = "/cart/panel";

/// The visitor's cart, as seen by the page being rendered.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(cart: CartContext) -> impl IntoResponse {
///     format!("{} items", cart.total_items())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CartContext {
    cart: Cart,
}

impl CartContext {
    /// Wrap a cart.
    #[must_use]
    pub const fn new(cart: Cart) -> Self {
        Self { cart }
    }

    /// The cart itself.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Total number of units in the cart.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.cart.total_items()
    }

    /// Target of the open-cart action.
    #[must_use]
    pub const fn open_cart_href(&self) -> &'static str {
        OPEN_CART_HREF
    }
}

impl<S> FromRequestParts<S> for CartContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let cart = match parts.extensions.get::<Session>() {
            Some(session) => load_cart(session).await,
            None => Cart::default(),
        };

        Ok(Self::new(cart))
    }
}

/// Load the cart from the session, empty when absent or unreadable.
pub async fn load_cart(session: &Session) -> Cart {
    match session.get::<Cart>(session_keys::CART).await {
        Ok(cart) => cart.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read cart from session");
            Cart::default()
        }
    }
}

/// Store the cart in the session.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CART, cart).await
}

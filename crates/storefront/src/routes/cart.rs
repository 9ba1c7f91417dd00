//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself is stored in the session; adding an item answers with the
//! header badge and an `HX-Trigger: cart-updated` header so the floating cart
//! refreshes too.

use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use serde::Deserialize;
use solestyle_core::CartLine;
use solestyle_core::logic::{OptionSelection, ProductLogic};
use tower_sessions::Session;
use tracing::instrument;

use crate::components::{CartCount, CartPanel, FloatingCart};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::{CartContext, load_cart, save_cart};
use crate::state::AppState;

/// Most units of one item a single add can request.
const MAX_ADD_QUANTITY: u32 = 10;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    #[serde(default)]
    pub variant_id: Option<String>,
    pub quantity: Option<u32>,
}

/// Add item to cart (HTMX).
///
/// The add is re-validated against the catalog: products that are out of
/// stock, or that have options but no matching variant, are rejected.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let quantity = form.quantity.unwrap_or(1).clamp(1, MAX_ADD_QUANTITY);

    let products = state.catalog().catalog().products().await?;
    let product = products
        .iter()
        .find(|p| p.id.as_str() == form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("Product {}", form.product_id)))?;

    let variant_id = form.variant_id.as_deref().filter(|id| !id.trim().is_empty());
    let selection = match variant_id {
        Some(id) => {
            let variant = product
                .variants
                .iter()
                .find(|v| v.id.as_str() == id)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown variant {id}")))?;
            variant
                .options
                .iter()
                .fold(OptionSelection::new(), |sel, (name, value)| sel.with(name, value))
        }
        None => OptionSelection::new(),
    };

    let logic = ProductLogic::resolve(product, selection);
    if !logic.can_add_to_cart {
        return Err(AppError::BadRequest(format!(
            "{} cannot be added to the cart",
            product.title
        )));
    }

    let variant = logic.matching_variant;
    let line = CartLine {
        product_id: product.id.clone(),
        variant_id: variant.map(|v| v.id.clone()),
        title: product.title.clone(),
        variant_title: variant
            .filter(|_| logic.has_variants)
            .map(|v| product.variant_label(v)),
        unit_price: logic.current_price,
        image: logic.display_image().map(String::from),
        quantity,
    };

    let mut cart = load_cart(&session).await;
    cart.add(line);
    save_cart(&session, &cart).await?;

    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("product_id", product.id.as_str())]),
    );
    tracing::info!(
        product_id = %product.id,
        quantity,
        total_items = cart.total_items(),
        "Added to cart"
    );

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCount::new(cart.total_items()),
    )
        .into_response())
}

/// Cart count badge fragment (HTMX).
pub async fn count(cart: CartContext) -> CartCount {
    CartCount::new(cart.total_items())
}

/// Floating cart fragment (HTMX).
pub async fn floating(cart: CartContext) -> FloatingCart {
    FloatingCart::new(&cart)
}

/// Cart panel fragment, the open-cart action (HTMX).
pub async fn panel(cart: CartContext) -> CartPanel {
    CartPanel::new(cart.cart())
}

/// Empty fragment that closes the cart panel (HTMX).
pub async fn close_panel() -> Html<&'static str> {
    Html("")
}

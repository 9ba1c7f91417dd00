//! Floating cart button.

use askama::Template;
use askama_web::WebTemplate;

use super::badge_label;
use crate::middleware::CartContext;

/// Round button showing the cart count; renders nothing for an empty cart.
#[derive(Debug, Clone, Template, WebTemplate)]
#[template(path = "components/floating_cart.html")]
pub struct FloatingCart {
    pub count: u32,
    pub label: String,
    pub open_href: &'static str,
}

impl FloatingCart {
    #[must_use]
    pub fn new(cart: &CartContext) -> Self {
        let count = cart.total_items();
        Self {
            count,
            label: badge_label(count),
            open_href: cart.open_cart_href(),
        }
    }
}

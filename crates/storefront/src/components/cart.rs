//! Cart badge and cart panel fragments.

use askama::Template;
use askama_web::WebTemplate;
use solestyle_core::Cart;

use super::badge_label;

/// Header cart badge; refreshes itself on `cart-updated`.
#[derive(Debug, Clone, Template, WebTemplate)]
#[template(path = "components/cart_count.html")]
pub struct CartCount {
    pub count: u32,
    pub label: String,
}

impl CartCount {
    #[must_use]
    pub fn new(count: u32) -> Self {
        Self {
            count,
            label: badge_label(count),
        }
    }
}

/// Cart line display data.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub title: String,
    pub variant_title: Option<String>,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    pub image: Option<String>,
}

/// Slide-over listing the cart contents.
#[derive(Debug, Clone, Template, WebTemplate)]
#[template(path = "components/cart_panel.html")]
pub struct CartPanel {
    pub lines: Vec<CartLineView>,
    pub item_count: u32,
    pub subtotal: Option<String>,
}

impl CartPanel {
    #[must_use]
    pub fn new(cart: &Cart) -> Self {
        Self {
            lines: cart
                .lines
                .iter()
                .map(|line| CartLineView {
                    title: line.title.clone(),
                    variant_title: line.variant_title.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price.display(),
                    line_total: line.line_total().display(),
                    image: line.image.clone(),
                })
                .collect(),
            item_count: cart.total_items(),
            subtotal: cart.subtotal().map(|price| price.display()),
        }
    }
}

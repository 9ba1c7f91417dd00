//! View components.
//!
//! Each component is an Askama template struct built from domain records
//! (plus the cart context where relevant). Parents embed children with
//! `{{ child|safe }}`; components that double as HTMX fragments also derive
//! `WebTemplate`.

pub mod cart;
pub mod collection_tile;
pub mod floating_cart;
pub mod landing;
pub mod product_tile;
pub mod shell;

pub use cart::{CartCount, CartPanel};
pub use collection_tile::CollectionTile;
pub use floating_cart::FloatingCart;
pub use landing::{LandingPage, ProductsSection};
pub use product_tile::ProductTile;
pub use shell::{Layout, PageShell};

/// Largest count shown verbatim on cart badges.
const MAX_BADGE_COUNT: u32 = 99;

/// Cart badge text: the count, capped at "99+".
#[must_use]
pub fn badge_label(count: u32) -> String {
    if count > MAX_BADGE_COUNT {
        format!("{MAX_BADGE_COUNT}+")
    } else {
        count.to_string()
    }
}

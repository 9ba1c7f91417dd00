//! Pure view logic.
//!
//! - [`product`] - Per-product display state (variant, price, availability)
//! - [`index`] - Landing page state (loading flags, filtering, selection)

pub mod index;
pub mod product;

pub use index::{IndexLogic, Loadable};
pub use product::{OPTION_QUERY_PREFIX, OptionSelection, ProductLogic};

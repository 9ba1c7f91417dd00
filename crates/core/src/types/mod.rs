//! Core types for SoleStyle.
//!
//! Records are received from the catalog and consumed read-only by the views.

pub mod blog;
pub mod cart;
pub mod collection;
pub mod id;
pub mod price;
pub mod product;

pub use blog::BlogPostSummary;
pub use cart::{Cart, CartLine};
pub use collection::Collection;
pub use id::*;
pub use price::{CurrencyCode, Price, PriceError};
pub use product::{Product, ProductOption, ProductVariant, strip_html_tags};

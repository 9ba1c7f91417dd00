//! SoleStyle Core - Catalog types and view logic.
//!
//! This crate provides the records the storefront renders and the pure
//! functions that turn them into display-ready state. The `storefront`
//! crate feeds it catalog data and renders the result.
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no templates. Everything here is a function of its inputs, which
//! keeps it trivially testable.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, products, collections, blog posts, carts
//! - [`logic`] - Product variant resolution and landing page filtering

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod logic;
pub mod types;

pub use logic::Loadable;
pub use types::*;

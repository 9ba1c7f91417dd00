//! Cache types for remote catalog responses.

use std::sync::Arc;

use solestyle_core::{BlogPostSummary, Collection, Product};

/// Cache key, one per catalog table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Products,
    Collections,
    BlogPosts,
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Products(Arc<Vec<Product>>),
    Collections(Arc<Vec<Collection>>),
    BlogPosts(Arc<Vec<BlogPostSummary>>),
}

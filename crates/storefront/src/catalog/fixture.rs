//! JSON fixture catalog.
//!
//! The fixture file holds the three catalog tables as top-level arrays:
//!
//! ```json
//! {
//!   "products": [...],
//!   "collections": [...],
//!   "blog_posts": [...]
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use solestyle_core::{BlogPostSummary, Collection, Product};

use super::CatalogError;

/// Raw catalog contents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub blog_posts: Vec<BlogPostSummary>,
}

/// Catalog served from memory.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    products: Arc<Vec<Product>>,
    collections: Arc<Vec<Collection>>,
    blog_posts: Arc<Vec<BlogPostSummary>>,
}

impl FixtureCatalog {
    /// Wrap already-parsed catalog data.
    #[must_use]
    pub fn new(data: CatalogData) -> Self {
        Self {
            products: Arc::new(data.products),
            collections: Arc::new(data.collections),
            blog_posts: Arc::new(data.blog_posts),
        }
    }

    /// Read and parse a fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid catalog JSON.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse fixture JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a catalog.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;
        Ok(Self::new(data))
    }

    #[must_use]
    pub fn products(&self) -> Arc<Vec<Product>> {
        Arc::clone(&self.products)
    }

    #[must_use]
    pub fn collections(&self) -> Arc<Vec<Collection>> {
        Arc::clone(&self.collections)
    }

    #[must_use]
    pub fn blog_posts(&self) -> Arc<Vec<BlogPostSummary>> {
        Arc::clone(&self.blog_posts)
    }
}

//! Catalog data providers.
//!
//! # Architecture
//!
//! - [`Catalog`] is the data provider contract: products, collections and
//!   blog post summaries as immutable, shareable lists
//! - [`FixtureCatalog`] reads a JSON file once at startup (development, tests)
//! - [`RemoteCatalog`] reads PostgREST-style tables over HTTP, cached in-memory
//!   via `moka`
//! - [`CatalogStore`] tracks per-section readiness so pages can show loading
//!   states while the initial fetch is in flight
//!
//! # Example
//!
//! ```rust,ignore
//! use solestyle_storefront::catalog::{Catalog, CatalogStore};
//!
//! let catalog = Catalog::from_config(&config)?;
//! let store = CatalogStore::new(catalog);
//! store.warm_async();
//!
//! // Later, inside a handler
//! let products = store.products().await;
//! ```

mod cache;
mod conversions;
pub mod fixture;
pub mod remote;
pub mod store;

use std::sync::Arc;

use solestyle_core::{BlogPostSummary, Collection, Product};
use thiserror::Error;

use crate::config::{CatalogConfig, StorefrontConfig};

pub use fixture::{CatalogData, FixtureCatalog};
pub use remote::RemoteCatalog;
pub use store::CatalogStore;

/// Errors that can occur when reading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog API answered with a non-success status.
    #[error("Catalog API returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// First part of the response body.
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid endpoint URL.
    #[error("Invalid catalog URL: {0}")]
    Url(#[from] url::ParseError),

    /// Fixture file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that failed to load.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Rate limited by the catalog API.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// The configured catalog backend.
#[derive(Clone)]
pub enum Catalog {
    /// Local JSON fixture.
    Fixture(FixtureCatalog),
    /// Hosted REST catalog.
    Remote(RemoteCatalog),
}

impl Catalog {
    /// Build the catalog described by the storefront configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture file cannot be read or parsed.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self, CatalogError> {
        match &config.catalog {
            CatalogConfig::Fixture { path } => Ok(Self::Fixture(FixtureCatalog::load(path)?)),
            CatalogConfig::Remote {
                url,
                api_key,
                cache_ttl,
            } => Ok(Self::Remote(RemoteCatalog::new(
                url.clone(),
                api_key.clone(),
                config.currency,
                *cache_ttl,
            ))),
        }
    }

    /// All products.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote catalog cannot be reached or parsed.
    pub async fn products(&self) -> Result<Arc<Vec<Product>>, CatalogError> {
        match self {
            Self::Fixture(fixture) => Ok(fixture.products()),
            Self::Remote(remote) => remote.products().await,
        }
    }

    /// All collections.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote catalog cannot be reached or parsed.
    pub async fn collections(&self) -> Result<Arc<Vec<Collection>>, CatalogError> {
        match self {
            Self::Fixture(fixture) => Ok(fixture.collections()),
            Self::Remote(remote) => remote.collections().await,
        }
    }

    /// All blog post summaries.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote catalog cannot be reached or parsed.
    pub async fn blog_posts(&self) -> Result<Arc<Vec<BlogPostSummary>>, CatalogError> {
        match self {
            Self::Fixture(fixture) => Ok(fixture.blog_posts()),
            Self::Remote(remote) => remote.blog_posts().await,
        }
    }

    /// Find a product by its URL slug.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no product has this slug.
    pub async fn product_by_slug(&self, slug: &str) -> Result<Product, CatalogError> {
        self.products()
            .await?
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("Product not found: {slug}")))
    }
}

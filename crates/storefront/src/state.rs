//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogError, CatalogStore};
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the catalog.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogStore,
}

impl AppState {
    /// Create application state with a pending catalog.
    ///
    /// Call [`CatalogStore::warm_async`] on [`Self::catalog`] to start loading.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured fixture cannot be loaded.
    pub fn new(config: StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog = CatalogStore::new(Catalog::from_config(&config)?);
        Ok(Self::with_catalog(config, catalog))
    }

    /// Create application state around an existing catalog store.
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: CatalogStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }
}

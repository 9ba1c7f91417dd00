//! Catalog sections with load tracking.
//!
//! The store starts with every section pending and is warmed by a background
//! task. Until a section settles, reads return [`Loadable::Loading`] so pages
//! can render skeletons. A section whose fetch fails still settles (to an
//! empty list) so the page never waits forever.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use solestyle_core::{BlogPostSummary, Collection, Loadable, Product};
use tracing::{error, info, instrument};

use super::{Catalog, CatalogError};

/// Catalog plus per-section readiness.
#[derive(Clone)]
pub struct CatalogStore {
    catalog: Catalog,
    readiness: Arc<Readiness>,
}

#[derive(Default)]
struct Readiness {
    products: AtomicBool,
    collections: AtomicBool,
    blog_posts: AtomicBool,
}

impl CatalogStore {
    /// A store whose sections are all pending.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            readiness: Arc::new(Readiness::default()),
        }
    }

    /// A store whose sections are all settled.
    #[must_use]
    pub fn ready(catalog: Catalog) -> Self {
        let store = Self::new(catalog);
        store.readiness.products.store(true, Ordering::Release);
        store.readiness.collections.store(true, Ordering::Release);
        store.readiness.blog_posts.store(true, Ordering::Release);
        store
    }

    /// Underlying catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Whether every section has settled.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.readiness.products.load(Ordering::Acquire)
            && self.readiness.collections.load(Ordering::Acquire)
            && self.readiness.blog_posts.load(Ordering::Acquire)
    }

    /// Spawn a background task that loads every section.
    pub fn warm_async(&self) {
        info!("Spawning background catalog warm-up task");
        let store = self.clone();
        tokio::spawn(async move {
            store.warm().await;
            info!("Catalog warm-up finished");
        });
    }

    /// Load every section concurrently, settling each as it completes.
    #[instrument(skip_all)]
    pub async fn warm(&self) {
        let readiness = &self.readiness;
        tokio::join!(
            settle(&readiness.products, "products", self.catalog.products()),
            settle(
                &readiness.collections,
                "collections",
                self.catalog.collections()
            ),
            settle(&readiness.blog_posts, "blog_posts", self.catalog.blog_posts()),
        );
    }

    /// Products, or `Loading` before the section settles.
    pub async fn products(&self) -> Loadable<Arc<Vec<Product>>> {
        read(&self.readiness.products, "products", self.catalog.products()).await
    }

    /// Collections, or `Loading` before the section settles.
    pub async fn collections(&self) -> Loadable<Arc<Vec<Collection>>> {
        read(
            &self.readiness.collections,
            "collections",
            self.catalog.collections(),
        )
        .await
    }

    /// Blog post summaries, or `Loading` before the section settles.
    pub async fn blog_posts(&self) -> Loadable<Arc<Vec<BlogPostSummary>>> {
        read(
            &self.readiness.blog_posts,
            "blog_posts",
            self.catalog.blog_posts(),
        )
        .await
    }

    /// Find a product by slug, regardless of warm-up state.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no product has this slug.
    pub async fn product_by_slug(&self, slug: &str) -> Result<Product, CatalogError> {
        self.catalog.product_by_slug(slug).await
    }
}

async fn settle<T>(
    flag: &AtomicBool,
    section: &'static str,
    fetch: impl Future<Output = Result<Arc<Vec<T>>, CatalogError>>,
) {
    match fetch.await {
        Ok(items) => info!(section, count = items.len(), "Catalog section loaded"),
        Err(e) => error!(section, error = %e, "Failed to load catalog section"),
    }
    flag.store(true, Ordering::Release);
}

async fn read<T>(
    flag: &AtomicBool,
    section: &'static str,
    fetch: impl Future<Output = Result<Arc<Vec<T>>, CatalogError>>,
) -> Loadable<Arc<Vec<T>>> {
    if !flag.load(Ordering::Acquire) {
        return Loadable::Loading;
    }
    match fetch.await {
        Ok(items) => Loadable::Ready(items),
        Err(e) => {
            error!(section, error = %e, "Failed to read catalog section");
            Loadable::Ready(Arc::new(Vec::new()))
        }
    }
}

//! REST catalog client.
//!
//! Reads PostgREST-style tables (`/rest/v1/{table}?select=*`) with `reqwest`.
//! Each table is cached in full using `moka`; the TTL comes from
//! configuration.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use solestyle_core::{BlogPostSummary, Collection, CurrencyCode, Product};
use tracing::{debug, instrument};
use url::Url;

use super::CatalogError;
use super::cache::{CacheKey, CacheValue};
use super::conversions::{
    BlogPostRow, CollectionRow, ProductRow, convert_blog_post, convert_collection,
    convert_product,
};

/// Client for the hosted catalog.
#[derive(Clone)]
pub struct RemoteCatalog {
    inner: Arc<RemoteCatalogInner>,
}

struct RemoteCatalogInner {
    client: reqwest::Client,
    base_url: Url,
    api_key: SecretString,
    currency: CurrencyCode,
    cache: Cache<CacheKey, CacheValue>,
}

impl RemoteCatalog {
    /// Create a client for the catalog at `base_url`.
    #[must_use]
    pub fn new(
        base_url: Url,
        api_key: SecretString,
        currency: CurrencyCode,
        cache_ttl: Duration,
    ) -> Self {
        let cache = Cache::builder()
            .max_capacity(16)
            .time_to_live(cache_ttl)
            .build();

        Self {
            inner: Arc::new(RemoteCatalogInner {
                client: reqwest::Client::new(),
                base_url,
                api_key,
                currency,
                cache,
            }),
        }
    }

    fn table_url(&self, table: &str) -> Result<Url, CatalogError> {
        let mut url = self.inner.base_url.join(&format!("rest/v1/{table}"))?;
        url.query_pairs_mut().append_pair("select", "*");
        Ok(url)
    }

    /// Fetch every row of a table.
    async fn fetch_table<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, CatalogError> {
        let url = self.table_url(table)?;
        let api_key = self.inner.api_key.expose_secret();

        let response = self
            .inner
            .client
            .get(url)
            .header("apikey", api_key)
            .bearer_auth(api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(CatalogError::RateLimited(retry_after));
        }

        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                table,
                body = %response_text.chars().take(500).collect::<String>(),
                "Catalog API returned non-success status"
            );
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: response_text.chars().take(200).collect(),
            });
        }

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                table,
                body = %response_text.chars().take(500).collect::<String>(),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }

    /// All products, priced in the store currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Arc<Vec<Product>>, CatalogError> {
        if let Some(CacheValue::Products(products)) =
            self.inner.cache.get(&CacheKey::Products).await
        {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let rows: Vec<ProductRow> = self.fetch_table("products").await?;
        let currency = self.inner.currency;
        let products = Arc::new(
            rows.into_iter()
                .map(|row| convert_product(row, currency))
                .collect::<Vec<_>>(),
        );

        self.inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(Arc::clone(&products)))
            .await;

        Ok(products)
    }

    /// All collections.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn collections(&self) -> Result<Arc<Vec<Collection>>, CatalogError> {
        if let Some(CacheValue::Collections(collections)) =
            self.inner.cache.get(&CacheKey::Collections).await
        {
            debug!("Cache hit for collections");
            return Ok(collections);
        }

        let rows: Vec<CollectionRow> = self.fetch_table("collections").await?;
        let collections = Arc::new(rows.into_iter().map(convert_collection).collect::<Vec<_>>());

        self.inner
            .cache
            .insert(
                CacheKey::Collections,
                CacheValue::Collections(Arc::clone(&collections)),
            )
            .await;

        Ok(collections)
    }

    /// All blog post summaries.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn blog_posts(&self) -> Result<Arc<Vec<BlogPostSummary>>, CatalogError> {
        if let Some(CacheValue::BlogPosts(posts)) =
            self.inner.cache.get(&CacheKey::BlogPosts).await
        {
            debug!("Cache hit for blog posts");
            return Ok(posts);
        }

        let rows: Vec<BlogPostRow> = self.fetch_table("blog_posts").await?;
        let posts = Arc::new(rows.into_iter().map(convert_blog_post).collect::<Vec<_>>());

        self.inner
            .cache
            .insert(CacheKey::BlogPosts, CacheValue::BlogPosts(Arc::clone(&posts)))
            .await;

        Ok(posts)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn catalog(base: &str) -> RemoteCatalog {
        RemoteCatalog::new(
            Url::parse(base).unwrap(),
            SecretString::from("anon-key"),
            CurrencyCode::USD,
            Duration::from_secs(60),
        )
    }

    #[test]
    fn test_table_url() {
        let url = catalog("https://shop.example.co/").table_url("products").unwrap();
        assert_eq!(url.as_str(), "https://shop.example.co/rest/v1/products?select=*");
    }

    #[test]
    fn test_table_url_without_trailing_slash() {
        let url = catalog("https://shop.example.co").table_url("collections").unwrap();
        assert_eq!(url.as_str(), "https://shop.example.co/rest/v1/collections?select=*");
    }
}

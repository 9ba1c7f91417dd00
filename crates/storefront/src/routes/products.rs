//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use solestyle_core::Product;
use solestyle_core::logic::{OptionSelection, ProductLogic};
use tracing::instrument;

use super::not_found::not_found_page;
use crate::catalog::CatalogError;
use crate::components::{PageShell, ProductTile};
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::CartContext;
use crate::state::AppState;

/// Product page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/product.html")]
pub struct ProductTemplate {
    pub shell: PageShell,
    pub tile: ProductTile,
    pub description: Option<String>,
}

/// Resolve a tile for `product` under the selection carried by `query`.
fn tile_for(product: &Product, query: &[(String, String)]) -> ProductTile {
    let selection = OptionSelection::from_query(
        product,
        query.iter().map(|(k, v)| (k.as_str(), v.as_str())),
    );
    ProductTile::new(&ProductLogic::resolve(product, selection))
}

/// Display a product page.
#[instrument(skip(state, cart, query))]
pub async fn show(
    State(state): State<AppState>,
    cart: CartContext,
    Path(slug): Path<String>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Response> {
    let product = match state.catalog().product_by_slug(&slug).await {
        Ok(product) => product,
        Err(CatalogError::NotFound(_)) => return Ok(not_found_page(&cart)),
        Err(e) => return Err(e.into()),
    };

    Ok(ProductTemplate {
        shell: PageShell::new(&cart).with_title(product.title.clone()),
        tile: tile_for(&product, &query),
        description: product.plain_description(),
    }
    .into_response())
}

/// Product tile fragment re-rendered after an option click (HTMX).
#[instrument(skip(state, query))]
pub async fn tile(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<ProductTile> {
    let product = state.catalog().product_by_slug(&slug).await.map_err(|e| match e {
        CatalogError::NotFound(_) => AppError::NotFound(format!("Product {slug}")),
        other => other.into(),
    })?;

    Ok(tile_for(&product, &query))
}

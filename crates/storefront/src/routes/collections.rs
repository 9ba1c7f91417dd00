//! Collection route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use solestyle_core::logic::IndexLogic;
use tracing::instrument;

use crate::components::{CollectionTile, PageShell};
use crate::filters;
use crate::middleware::CartContext;
use crate::state::AppState;

/// Collection listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/collections.html")]
pub struct CollectionsTemplate {
    pub shell: PageShell,
    pub loading: bool,
    pub tiles: Vec<CollectionTile>,
}

/// Display all collections; each tile links to the filtered landing page.
#[instrument(skip(state, cart))]
pub async fn index(State(state): State<AppState>, cart: CartContext) -> impl IntoResponse {
    let collections = state.catalog().collections().await;
    let shell = PageShell::new(&cart)
        .with_title("Collections")
        .with_active("/collections");

    let landing = IndexLogic::default();
    let tiles = collections.as_ready().map_or_else(Vec::new, |list| {
        list.iter()
            .map(|c| CollectionTile::new(c, |id| landing.view_collection_href(id)))
            .collect()
    });

    CollectionsTemplate {
        shell,
        loading: collections.is_loading(),
        tiles,
    }
}

//! Landing page route handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use solestyle_core::{CollectionId, Loadable, logic::IndexLogic};
use tracing::instrument;

use crate::components::{LandingPage, PageShell, ProductsSection};
use crate::middleware::CartContext;
use crate::state::AppState;

/// Landing page query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct LandingQuery {
    /// Search term.
    #[serde(default)]
    pub q: String,
    /// Selected collection id.
    #[serde(default)]
    pub collection: Option<String>,
}

/// Build landing page state from the catalog and the visitor's query.
async fn landing_logic(state: &AppState, query: &LandingQuery) -> IndexLogic {
    let catalog = state.catalog();
    let (products, collections, blogs) = tokio::join!(
        catalog.products(),
        catalog.collections(),
        catalog.blog_posts()
    );

    let selected = query
        .collection
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(CollectionId::new);

    IndexLogic::build(
        as_slice(&products),
        as_slice(&collections),
        as_slice(&blogs),
        &query.q,
        selected.as_ref(),
    )
}

fn as_slice<T>(section: &Loadable<Arc<Vec<T>>>) -> Loadable<&[T]> {
    match section {
        Loadable::Loading => Loadable::Loading,
        Loadable::Ready(items) => Loadable::Ready(items.as_slice()),
    }
}

/// Display the landing page.
#[instrument(skip(state, cart))]
pub async fn index(
    State(state): State<AppState>,
    cart: CartContext,
    Query(query): Query<LandingQuery>,
) -> impl IntoResponse {
    let logic = landing_logic(&state, &query).await;
    LandingPage::new(&logic, PageShell::new(&cart).with_active("/"))
}

/// Products section fragment for search-as-you-type and the loading poll.
#[instrument(skip(state))]
pub async fn products_fragment(
    State(state): State<AppState>,
    Query(query): Query<LandingQuery>,
) -> impl IntoResponse {
    let logic = landing_logic(&state, &query).await;
    ProductsSection::new(&logic)
}

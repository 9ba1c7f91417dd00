//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing page (?q=, ?collection=)
//! GET  /fragments/products     - Products section (HTMX search and loading poll)
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Catalog readiness check
//!
//! # Products
//! GET  /products/{slug}        - Product page
//! GET  /products/{slug}/tile   - Product tile fragment (?option.<Name>=<value>)
//! GET  /collections            - Collection listing
//!
//! # Cart (HTMX fragments)
//! POST /cart/add               - Add to cart (returns badge, triggers cart-updated)
//! GET  /cart/count             - Cart count badge
//! GET  /cart/floating          - Floating cart button
//! GET  /cart/panel             - Cart panel
//! GET  /cart/panel/close       - Empty fragment closing the panel
//! ```
//!
//! Any other path renders the not-found page.

pub mod cart;
pub mod collections;
pub mod home;
pub mod not_found;
pub mod products;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/count", get(cart::count))
        .route("/floating", get(cart::floating))
        .route("/panel", get(cart::panel))
        .route("/panel/close", get(cart::close_panel))
}

/// Create all page and fragment routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/fragments/products", get(home::products_fragment))
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route("/products/{slug}", get(products::show))
        .route("/products/{slug}/tile", get(products::tile))
        .route("/collections", get(collections::index))
        .nest("/cart", cart_routes())
        .fallback(not_found::fallback)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable until every catalog section has settled.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.catalog().is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

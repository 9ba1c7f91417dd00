//! Not-found page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::components::{Layout, PageShell};
use crate::filters;
use crate::middleware::CartContext;

/// 404 page inside the shell.
#[derive(Template, WebTemplate)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub shell: PageShell,
}

/// Render the not-found page with a 404 status.
#[must_use]
pub fn not_found_page(cart: &CartContext) -> Response {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            shell: PageShell::new(cart)
                .with_title("Page not found")
                .with_layout(Layout::Centered),
        },
    )
        .into_response()
}

/// Router fallback.
pub async fn fallback(cart: CartContext) -> Response {
    not_found_page(&cart)
}

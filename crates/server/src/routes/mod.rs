//! HTTP route handlers.

pub mod categories;
pub mod products;
pub mod status;
pub mod widgets;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/products", get(products::index))
        .route("/api/categories/resolve", get(categories::resolve))
        .route("/api/status", get(status::show))
        .route(
            "/api/widgets",
            get(widgets::list).post(widgets::create),
        )
        .route(
            "/api/widgets/{id}",
            get(widgets::show)
                .put(widgets::update)
                .delete(widgets::destroy),
        )
        .route("/api/widgets/{id}/products", get(widgets::products))
        .with_state(state)
}

/// Liveness check.
async fn health() -> &'static str {
    "OK"
}

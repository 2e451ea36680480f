//! API route configuration.

use crate::api::handlers::{
    health_handler, index_handler, redirect_handler, shorten_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes of the service.
///
/// # Endpoints
///
/// - `GET  /`                  - Service description
/// - `GET  /health`            - Storage health check
/// - `POST /shorten`           - Create a short link
/// - `GET  /stats/{short_id}`  - Link statistics
/// - `GET  /{short_id}`        - Redirect to the original URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/stats/{short_id}", get(stats_handler))
        .route("/{short_id}", get(redirect_handler))
}

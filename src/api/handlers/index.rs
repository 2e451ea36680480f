//! Handler for the service description.

use axum::Json;
use std::collections::BTreeMap;

use crate::api::dto::index::IndexResponse;

/// Describes the service and its endpoints.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Json<IndexResponse> {
    let endpoints = BTreeMap::from([
        ("POST /shorten", "Create a short link"),
        ("GET /{short_id}", "Redirect to the original URL"),
        ("GET /stats/{short_id}", "Show link statistics"),
        ("GET /health", "Check service and storage health"),
    ]);

    Json(IndexResponse {
        service: "URL Shortener",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}

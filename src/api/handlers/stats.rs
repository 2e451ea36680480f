//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored record and click count of a short link.
///
/// # Endpoint
///
/// `GET /stats/{short_id}`
///
/// # Response
///
/// ```json
/// {
///   "short_id": "abc123",
///   "original_url": "http://example.com",
///   "created_at": "2024-06-01T12:00:00Z",
///   "click_count": 1
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short id doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(short_id): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.get_stats(&short_id).await?;

    Ok(Json(link.into()))
}

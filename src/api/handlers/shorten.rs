//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "http://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_id": "abc123", "short_url": "/abc123" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL lacks an `http://`/`https://` scheme.
/// Returns 500 Internal Server Error if the store fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state.link_service.create_short_link(payload.url).await?;
    let short_url = state.link_service.short_url(&link.short_id);

    Ok(Json(ShortenResponse {
        short_id: link.short_id,
        short_url,
    }))
}

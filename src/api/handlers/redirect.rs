//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// The click is counted before the `303 See Other` is returned, so every
/// successful response is reflected in the link statistics. URLs holding
/// spaces or non-ASCII characters are sent percent-encoded.
///
/// # Errors
///
/// Returns 404 Not Found if the short id doesn't exist.
/// Returns 500 Internal Server Error if the stored URL is not a valid
/// `Location` header value.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let original_url = state.link_service.resolve(&short_id).await?;

    let location = location_header(&original_url).ok_or_else(|| {
        tracing::error!(short_id = %short_id, "Stored URL is not a valid redirect target");
        AppError::storage_unavailable(
            "Stored URL is not a valid redirect target",
            json!({ "short_id": short_id }),
        )
    })?;

    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response())
}

/// Builds the `Location` value, percent-encoding URLs that are not plain ASCII.
fn location_header(original_url: &str) -> Option<HeaderValue> {
    if original_url.bytes().all(|b| b.is_ascii_graphic()) {
        return HeaderValue::try_from(original_url).ok();
    }

    let url = Url::parse(original_url).ok()?;
    HeaderValue::try_from(url.as_str()).ok()
}

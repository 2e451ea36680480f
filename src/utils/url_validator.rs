//! Validation of URLs submitted for shortening.
//!
//! URLs are checked but never rewritten: the stored value is exactly what the
//! client sent, so a redirect returns it unchanged.

use crate::error::AppError;
use serde_json::json;
use url::Url;
use validator::ValidationError;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must start with http:// or https://")]
    MissingScheme,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),
}

/// Checks that `input` is an absolute `http`/`https` URL.
///
/// # Errors
///
/// Returns [`UrlValidationError::MissingScheme`] when the input does not start
/// with `http://` or `https://` (case-insensitive), or
/// [`UrlValidationError::InvalidFormat`] when it does but cannot be parsed,
/// e.g. `http://` with no host.
///
/// # Examples
///
/// ```ignore
/// assert!(check_url("https://example.com/path?q=1").is_ok());
/// assert!(check_url("not-a-url").is_err());
/// assert!(check_url("ftp://example.com").is_err());
/// ```
pub fn check_url(input: &str) -> Result<(), UrlValidationError> {
    let lower = input.get(..8).unwrap_or(input).to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return Err(UrlValidationError::MissingScheme);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::InvalidFormat("missing host".to_string()));
    }

    Ok(())
}

/// Validates a URL, mapping failures to [`AppError::Validation`].
pub fn validate_target_url(input: &str) -> Result<(), AppError> {
    check_url(input).map_err(|e| {
        AppError::bad_request(e.to_string(), json!({ "url": input }))
    })
}

/// `validator` hook used by request DTOs.
pub fn validate_http_url(input: &str) -> Result<(), ValidationError> {
    check_url(input).map_err(|e| {
        let mut error = ValidationError::new("http_url");
        error.message = Some(e.to_string().into());
        error
    })
}

//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::url_validator::validate_http_url;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be absolute HTTP/HTTPS).
    #[validate(custom(function = "validate_http_url"))]
    pub url: String,
}

/// Response for a newly created short link.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_id: String,
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = ShortenRequest {
            url: "http://example.com".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_without_scheme() {
        let request = ShortenRequest {
            url: "not-a-url".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }
}

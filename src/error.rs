//! Application error type and its HTTP representation.
//!
//! Every fallible operation in the service returns [`AppError`]. The API layer
//! converts it into a JSON body of the form:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Short link not found", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors produced by the service core.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed input, e.g. a URL without an `http://` or `https://` scheme.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The requested short id does not exist.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// A short id was inserted twice. Recovered by regenerating the id.
    #[error("{message}")]
    DuplicateKey { message: String, details: Value },

    /// Persistence failed or no unique id could be allocated.
    #[error("{message}")]
    StorageUnavailable { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn duplicate_key(message: impl Into<String>, details: Value) -> Self {
        Self::DuplicateKey {
            message: message.into(),
            details,
        }
    }

    pub fn storage_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
            details,
        }
    }

    /// HTTP status and machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::DuplicateKey { .. } => (StatusCode::CONFLICT, "duplicate_key"),
            AppError::StorageUnavailable { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "storage_unavailable")
            }
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.status_and_code();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::DuplicateKey { message, details }
            | AppError::StorageUnavailable { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::duplicate_key(
                "Short id already exists",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!("Database error: {}", e);
        AppError::storage_unavailable("Storage unavailable", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}

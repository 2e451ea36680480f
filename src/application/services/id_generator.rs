//! Collision-checked short id allocation.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Default number of candidates tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Produces short ids that are not yet present in the store.
///
/// The check here is advisory: two concurrent requests may still pick the same
/// free id. The store's uniqueness constraint settles such races, see
/// [`crate::application::services::LinkService::create_short_link`].
pub struct IdGenerator {
    repository: Arc<dyn LinkRepository>,
    max_attempts: usize,
}

impl IdGenerator {
    pub fn new(repository: Arc<dyn LinkRepository>, max_attempts: usize) -> Self {
        Self {
            repository,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Draws one candidate for `url` and checks it against the store.
    ///
    /// Returns `None` when the candidate is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] when the store cannot be queried.
    pub async fn try_generate(&self, url: &str) -> Result<Option<String>, AppError> {
        let candidate = generate_code(url);

        if self.repository.exists(&candidate).await? {
            tracing::debug!(candidate = %candidate, "Short id collision");
            return Ok(None);
        }

        Ok(Some(candidate))
    }

    /// Generates a short id for `url` that is currently unused.
    ///
    /// Each attempt hashes the URL with fresh randomness, so a collision is
    /// followed by an unrelated candidate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] when every attempt collided or
    /// when the store cannot be queried.
    pub async fn generate(&self, url: &str) -> Result<String, AppError> {
        for _ in 0..self.max_attempts {
            if let Some(candidate) = self.try_generate(url).await? {
                return Ok(candidate);
            }
        }

        Err(exhausted(self.max_attempts, "Too many collisions"))
    }
}

/// Error returned once the attempt budget is spent.
pub(crate) fn exhausted(attempts: usize, reason: &str) -> AppError {
    tracing::error!(attempts, reason, "Failed to generate a unique short id");

    AppError::storage_unavailable(
        "Failed to generate unique short id",
        json!({ "reason": reason, "attempts": attempts }),
    )
}

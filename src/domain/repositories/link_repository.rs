//! Repository trait for short link data access.

use crate::domain::entities::{Link, LinkTarget, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the link store.
///
/// Every method is a single short operation; implementations must be safe to
/// call from many concurrent requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - In-process map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateKey`] if the short id already exists. The
    /// check is enforced by the store itself, not by callers.
    ///
    /// Returns [`AppError::StorageUnavailable`] on storage errors.
    async fn save(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Checks whether a short id is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on storage errors.
    async fn exists(&self, short_id: &str) -> Result<bool, AppError>;

    /// Looks up the redirect target and click count for a short id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(LinkTarget))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on storage errors.
    async fn get(&self, short_id: &str) -> Result<Option<LinkTarget>, AppError>;

    /// Atomically increases the click count by one.
    ///
    /// Returns `Ok(false)` if no link has this short id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on storage errors.
    async fn increment_click(&self, short_id: &str) -> Result<bool, AppError>;

    /// Returns the full record for a short id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on storage errors.
    async fn get_stats(&self, short_id: &str) -> Result<Option<Link>, AppError>;

    /// Verifies that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}

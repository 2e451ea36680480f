//! Link creation, redirect resolution and statistics.

use std::sync::Arc;

use serde_json::json;

use crate::application::services::IdGenerator;
use crate::application::services::id_generator::exhausted;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::is_valid_short_id;
use crate::utils::url_validator::validate_target_url;

/// Service for creating short links and serving them.
///
/// Holds the injected store; one instance is shared by all request handlers.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    generator: IdGenerator,
    base_url: Option<String>,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `max_attempts` bounds id generation, counting both collisions seen by
    /// the generator and duplicate keys rejected by the store.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        max_attempts: usize,
        base_url: Option<String>,
    ) -> Self {
        Self {
            generator: IdGenerator::new(repository.clone(), max_attempts),
            repository,
            base_url: base_url.map(|b| b.trim_end_matches('/').to_string()),
        }
    }

    /// Creates a new short link for `original_url`.
    ///
    /// Every call creates a fresh record, also for a URL that was shortened
    /// before. The URL is stored exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not an absolute
    /// `http`/`https` URL. The store is not touched in that case.
    ///
    /// Returns [`AppError::StorageUnavailable`] if no unique id could be
    /// allocated or the store fails.
    pub async fn create_short_link(&self, original_url: String) -> Result<Link, AppError> {
        validate_target_url(&original_url)?;

        let max_attempts = self.generator.max_attempts();

        for attempt in 1..=max_attempts {
            let Some(short_id) = self.generator.try_generate(&original_url).await? else {
                continue;
            };
            let new_link = NewLink::new(short_id, original_url.clone());

            match self.repository.save(new_link).await {
                Ok(link) => {
                    tracing::info!(short_id = %link.short_id, "Short link created");
                    return Ok(link);
                }
                Err(AppError::DuplicateKey { .. }) => {
                    tracing::warn!(attempt, "Short id taken concurrently, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        Err(exhausted(max_attempts, "Every candidate was taken"))
    }

    /// Resolves a short id to its URL and records the click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the short id is unknown.
    /// Returns [`AppError::StorageUnavailable`] on storage errors.
    pub async fn resolve(&self, short_id: &str) -> Result<String, AppError> {
        if !is_valid_short_id(short_id) {
            return Err(not_found(short_id));
        }

        let target = self
            .repository
            .get(short_id)
            .await?
            .ok_or_else(|| not_found(short_id))?;

        if !self.repository.increment_click(short_id).await? {
            return Err(not_found(short_id));
        }

        tracing::debug!(short_id, "Click recorded");

        Ok(target.original_url)
    }

    /// Returns the stored record of a short id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the short id is unknown.
    /// Returns [`AppError::StorageUnavailable`] on storage errors.
    pub async fn get_stats(&self, short_id: &str) -> Result<Link, AppError> {
        if !is_valid_short_id(short_id) {
            return Err(not_found(short_id));
        }

        self.repository
            .get_stats(short_id)
            .await?
            .ok_or_else(|| not_found(short_id))
    }

    /// Builds the public URL of a short id.
    ///
    /// Without a configured base URL the result is the path `/{short_id}`.
    pub fn short_url(&self, short_id: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{}/{}", base, short_id),
            None => format!("/{}", short_id),
        }
    }

    /// Checks that the store is reachable.
    pub async fn health(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

fn not_found(short_id: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "short_id": short_id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LinkTarget;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn create_test_link(short_id: &str, url: &str, click_count: i64) -> Link {
        Link::new(short_id.to_string(), url.to_string(), Utc::now(), click_count)
    }

    fn service(mock_repo: MockLinkRepository) -> LinkService {
        LinkService::new(Arc::new(mock_repo), 10, None)
    }

    #[tokio::test]
    async fn test_create_short_link_success() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo.expect_exists().times(1).returning(|_| Ok(false));
        mock_repo
            .expect_save()
            .withf(|new_link| new_link.original_url == "http://example.com")
            .times(1)
            .returning(|new_link| Ok(new_link.into_link()));

        let link = service(mock_repo)
            .create_short_link("http://example.com".to_string())
            .await
            .unwrap();

        assert_eq!(link.original_url, "http://example.com");
        assert_eq!(link.short_id.len(), 6);
        assert_eq!(link.click_count, 0);
    }

    #[tokio::test]
    async fn test_create_short_link_invalid_url_skips_store() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_exists().times(0);
        mock_repo.expect_save().times(0);

        let result = service(mock_repo)
            .create_short_link("not-a-url".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_short_link_retries_on_duplicate_key() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo.expect_exists().times(2).returning(|_| Ok(false));

        let mut calls = 0;
        mock_repo.expect_save().times(2).returning(move |new_link| {
            calls += 1;
            if calls == 1 {
                Err(AppError::duplicate_key("taken", json!({})))
            } else {
                Ok(new_link.into_link())
            }
        });

        let result = service(mock_repo)
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_short_link_duplicate_key_exhaustion() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo.expect_exists().times(3).returning(|_| Ok(false));
        mock_repo
            .expect_save()
            .times(3)
            .returning(|_| Err(AppError::duplicate_key("taken", json!({}))));

        let service = LinkService::new(Arc::new(mock_repo), 3, None);
        let result = service
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::StorageUnavailable { .. }
        ));
    }

    #[tokio::test]
    async fn test_create_short_link_collisions_and_duplicates_share_budget() {
        let mut mock_repo = MockLinkRepository::new();

        let mut calls = 0;
        mock_repo.expect_exists().times(3).returning(move |_| {
            calls += 1;
            Ok(calls % 3 != 0)
        });
        mock_repo
            .expect_save()
            .times(1)
            .returning(|_| Err(AppError::duplicate_key("taken", json!({}))));

        let service = LinkService::new(Arc::new(mock_repo), 3, None);
        let result = service
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::StorageUnavailable { .. }
        ));
    }

    #[tokio::test]
    async fn test_create_short_link_storage_error_not_retried() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo.expect_exists().times(1).returning(|_| Ok(false));
        mock_repo
            .expect_save()
            .times(1)
            .returning(|_| Err(AppError::storage_unavailable("disk full", json!({}))));

        let result = service(mock_repo)
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::StorageUnavailable { .. }
        ));
    }

    #[tokio::test]
    async fn test_resolve_increments_click() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_get()
            .withf(|short_id| short_id == "abc123")
            .times(1)
            .returning(|_| {
                Ok(Some(LinkTarget {
                    original_url: "http://example.com".to_string(),
                    click_count: 0,
                }))
            });
        mock_repo
            .expect_increment_click()
            .withf(|short_id| short_id == "abc123")
            .times(1)
            .returning(|_| Ok(true));

        let url = service(mock_repo).resolve("abc123").await.unwrap();
        assert_eq!(url, "http://example.com");
    }

    #[tokio::test]
    async fn test_resolve_unknown_id() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo.expect_get().times(1).returning(|_| Ok(None));
        mock_repo.expect_increment_click().times(0);

        let result = service(mock_repo).resolve("abc123").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_malformed_id_skips_store() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_get().times(0);

        let result = service(mock_repo).resolve("favicon.ico").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_stats() {
        let mut mock_repo = MockLinkRepository::new();

        let link = create_test_link("abc123", "http://example.com", 3);
        mock_repo
            .expect_get_stats()
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));

        let stats = service(mock_repo).get_stats("abc123").await.unwrap();
        assert_eq!(stats.short_id, "abc123");
        assert_eq!(stats.click_count, 3);
    }

    #[tokio::test]
    async fn test_get_stats_unknown_id() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_get_stats().times(1).returning(|_| Ok(None));

        let result = service(mock_repo).get_stats("abc123").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[test]
    fn test_short_url_without_base() {
        let service = service(MockLinkRepository::new());
        assert_eq!(service.short_url("abc123"), "/abc123");
    }

    #[test]
    fn test_short_url_with_base() {
        let service = LinkService::new(
            Arc::new(MockLinkRepository::new()),
            10,
            Some("https://s.example.com/".to_string()),
        );
        assert_eq!(service.short_url("abc123"), "https://s.example.com/abc123");
    }
}

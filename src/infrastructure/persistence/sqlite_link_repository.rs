//! SQLite implementation of link repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkTarget, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// SQLite repository for link storage and retrieval.
///
/// Uniqueness of `short_id` is enforced by the table's `UNIQUE` constraint;
/// a violation surfaces as [`AppError::DuplicateKey`].
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn save(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (short_id, original_url, created_at)
            VALUES (?, ?, ?)
            RETURNING short_id, original_url, created_at, click_count
            "#,
        )
        .bind(&new_link.short_id)
        .bind(&new_link.original_url)
        .bind(new_link.created_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn exists(&self, short_id: &str) -> Result<bool, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links WHERE short_id = ?")
            .bind(short_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn get(&self, short_id: &str) -> Result<Option<LinkTarget>, AppError> {
        let target = sqlx::query_as::<_, LinkTarget>(
            "SELECT original_url, click_count FROM links WHERE short_id = ?",
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(target)
    }

    async fn increment_click(&self, short_id: &str) -> Result<bool, AppError> {
        let result =
            sqlx::query("UPDATE links SET click_count = click_count + 1 WHERE short_id = ?")
                .bind(short_id)
                .execute(self.pool.as_ref())
                .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_stats(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT short_id, original_url, created_at, click_count
            FROM links
            WHERE short_id = ?
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}

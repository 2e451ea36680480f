//! In-process implementation of link repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, LinkTarget, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Link store backed by a map guarded by an async read-write lock.
///
/// Inserts and click increments run under the write lock, so both the
/// uniqueness check and the counter update are atomic. Contents are lost when
/// the process exits.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, Link>>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn save(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.write().await;

        match links.entry(new_link.short_id.clone()) {
            Entry::Occupied(_) => Err(AppError::duplicate_key(
                "Short id already exists",
                json!({ "short_id": new_link.short_id }),
            )),
            Entry::Vacant(slot) => Ok(slot.insert(new_link.into_link()).clone()),
        }
    }

    async fn exists(&self, short_id: &str) -> Result<bool, AppError> {
        Ok(self.links.read().await.contains_key(short_id))
    }

    async fn get(&self, short_id: &str) -> Result<Option<LinkTarget>, AppError> {
        Ok(self.links.read().await.get(short_id).map(Link::target))
    }

    async fn increment_click(&self, short_id: &str) -> Result<bool, AppError> {
        let mut links = self.links.write().await;

        match links.get_mut(short_id) {
            Some(link) => {
                link.click_count += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn get_stats(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.read().await.get(short_id).cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

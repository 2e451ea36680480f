//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with its click counter.
///
/// `original_url` and `created_at` never change after creation. `click_count`
/// only grows, one step per served redirect.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Link {
    pub short_id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        short_id: String,
        original_url: String,
        created_at: DateTime<Utc>,
        click_count: i64,
    ) -> Self {
        Self {
            short_id,
            original_url,
            created_at,
            click_count,
        }
    }

    pub fn target(&self) -> LinkTarget {
        LinkTarget {
            original_url: self.original_url.clone(),
            click_count: self.click_count,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLink {
    pub short_id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl NewLink {
    /// Creates a link input stamped with the current time.
    pub fn new(short_id: String, original_url: String) -> Self {
        Self {
            short_id,
            original_url,
            created_at: Utc::now(),
        }
    }

    /// Converts the input into a stored record with zero clicks.
    pub fn into_link(self) -> Link {
        Link::new(self.short_id, self.original_url, self.created_at, 0)
    }
}

/// Redirect target and current click count of a link.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct LinkTarget {
    pub original_url: String,
    pub click_count: i64,
}

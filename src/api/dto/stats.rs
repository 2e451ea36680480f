//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Statistics for a single short link.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub short_id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl From<Link> for StatsResponse {
    fn from(link: Link) -> Self {
        Self {
            short_id: link.short_id,
            original_url: link.original_url,
            created_at: link.created_at,
            click_count: link.click_count,
        }
    }
}

//! Shared state injected into every request handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// Application state cloned into each handler by axum.
///
/// Built once in [`crate::server::run`]; there is no process-global store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    /// Wires the services around a link store.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        max_attempts: usize,
        base_url: Option<String>,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository, max_attempts, base_url)),
        }
    }
}

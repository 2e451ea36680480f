#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use shorturl::api::routes::public_routes;
use shorturl::domain::repositories::LinkRepository;
use shorturl::infrastructure::persistence::{MemoryLinkRepository, SqliteLinkRepository};
use shorturl::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const MAX_ATTEMPTS: usize = 10;

pub async fn create_test_link(pool: &SqlitePool, short_id: &str, url: &str) {
    sqlx::query("INSERT INTO links (short_id, original_url, created_at) VALUES (?, ?, ?)")
        .bind(short_id)
        .bind(url)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn click_count(pool: &SqlitePool, short_id: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM links WHERE short_id = ?")
        .bind(short_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository: Arc<dyn LinkRepository> = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    AppState::new(repository, MAX_ATTEMPTS, None)
}

pub fn create_memory_state(base_url: Option<&str>) -> AppState {
    let repository: Arc<dyn LinkRepository> = Arc::new(MemoryLinkRepository::new());
    AppState::new(repository, MAX_ATTEMPTS, base_url.map(str::to_string))
}

pub fn test_app(state: AppState) -> Router {
    public_routes().with_state(state)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(test_app(state)).unwrap()
}

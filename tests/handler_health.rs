mod common;

use sqlx::SqlitePool;

#[sqlx::test]
async fn test_health_endpoint_success(pool: SqlitePool) {
    let server = common::test_server(common::create_test_state(pool));

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[sqlx::test]
async fn test_health_endpoint_degraded_when_pool_closed(pool: SqlitePool) {
    let server = common::test_server(common::create_test_state(pool.clone()));
    pool.close().await;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["storage"]["status"], "error");
}

#[tokio::test]
async fn test_index_describes_endpoints() {
    let server = common::test_server(common::create_memory_state(None));

    let response = server.get("/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["service"], "URL Shortener");
    assert!(json["endpoints"].get("POST /shorten").is_some());
    assert!(json["endpoints"].get("GET /{short_id}").is_some());
    assert!(json["endpoints"].get("GET /stats/{short_id}").is_some());
    assert!(json["endpoints"].get("GET /health").is_some());
}

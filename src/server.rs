//! HTTP server initialization and runtime setup.
//!
//! Handles storage setup, migrations, dependency wiring and the Axum server
//! lifecycle including graceful shutdown.

use crate::config::{Config, StorageBackend};
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{MemoryLinkRepository, SqliteLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The configured link store (SQLite pool with migrations, or in-memory)
/// - Application state wrapping the store
/// - Axum HTTP server, stopped on SIGINT/SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (repository, pool): (Arc<dyn LinkRepository>, Option<SqlitePool>) =
        match config.storage_backend() {
            StorageBackend::Sqlite(url) => {
                let pool = connect_sqlite(&url, &config).await?;
                tracing::info!("Connected to database");

                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("Failed to migrate")?;
                tracing::info!("Migrations applied");

                (
                    Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone()))),
                    Some(pool),
                )
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; links are lost on shutdown");
                (Arc::new(MemoryLinkRepository::new()), None)
            }
        };

    let state = AppState::new(repository, config.id_max_attempts, config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Opens a SQLite pool, creating the database file and its directory if needed.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the database cannot be opened.
pub async fn connect_sqlite(database_url: &str, config: &Config) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid SQLite URL '{}'", database_url))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(config.db_busy_timeout));

    if let Some(dir) = options.get_filename().parent()
        && !dir.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create database directory {}", dir.display()))?;
    }

    SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await
        .context("Failed to connect to database")
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export DATABASE_URL="sqlite://data/urls.db"
//! export LISTEN="0.0.0.0:8000"
//! export BASE_URL="https://s.example.com"
//! ```
//!
//! ## Variables
//!
//! - `DATABASE_URL` - `sqlite:` URL, or `memory` for a process-local store
//!   (default: `sqlite://data/urls.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `BASE_URL` - Prefix for returned short URLs (default: unset, paths only)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `ID_MAX_ATTEMPTS` - Short id generation attempts (default: 10, range: 1-1000)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 5)
//! - `DB_BUSY_TIMEOUT` - Seconds a writer waits on a locked database (default: 5)

use anyhow::Result;
use std::env;

use crate::application::services::id_generator::DEFAULT_MAX_ATTEMPTS;

/// Value of `DATABASE_URL` selecting the in-memory store.
pub const MEMORY_DATABASE_URL: &str = "memory";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Public origin prepended to short ids in responses, without trailing slash.
    pub base_url: Option<String>,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound on short id candidates tried per shorten request.
    pub id_max_attempts: usize,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Seconds to wait for a database lock before failing
    /// (`DB_BUSY_TIMEOUT`, default: 5).
    pub db_busy_timeout: u64,
}

/// Storage backend selected by `DATABASE_URL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite(String),
    Memory,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/urls.db".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let base_url = env::var("BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim_end_matches('/').to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let id_max_attempts = env::var("ID_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_ATTEMPTS);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_busy_timeout = env::var("DB_BUSY_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            database_url,
            listen_addr,
            base_url,
            log_level,
            log_format,
            id_max_attempts,
            db_max_connections,
            db_busy_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is neither `memory` nor a `sqlite:` URL
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an `http`/`https` origin
    /// - `log_format` is not `text` or `json`
    /// - `id_max_attempts` is outside 1-1000
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if self.database_url != MEMORY_DATABASE_URL && !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must be 'memory' or start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref base_url) = self.base_url
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.id_max_attempts == 0 || self.id_max_attempts > 1000 {
            anyhow::bail!(
                "ID_MAX_ATTEMPTS must be between 1 and 1000, got {}",
                self.id_max_attempts
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_busy_timeout == 0 {
            anyhow::bail!("DB_BUSY_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Returns the storage backend named by `database_url`.
    pub fn storage_backend(&self) -> StorageBackend {
        if self.database_url == MEMORY_DATABASE_URL {
            StorageBackend::Memory
        } else {
            StorageBackend::Sqlite(self.database_url.clone())
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        match self.storage_backend() {
            StorageBackend::Sqlite(url) => tracing::info!("  Storage: SQLite ({})", url),
            StorageBackend::Memory => tracing::info!("  Storage: in-memory (not persisted)"),
        }
        tracing::info!(
            "  Base URL: {}",
            self.base_url.as_deref().unwrap_or("(relative paths)")
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Id generation attempts: {}", self.id_max_attempts);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

//! # shorturl
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Link entity and the link store contract
//! - **Application Layer** ([`application`]) - Id generation and link orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - 6-character hex short ids, collision-checked with a bounded retry
//! - Uniqueness enforced by the storage layer
//! - Atomic click counting on every redirect
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://data/urls.db"
//! cargo run
//!
//! curl -X POST localhost:8000/shorten -H 'content-type: application/json' \
//!      -d '{"url": "http://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{IdGenerator, LinkService};
    pub use crate::domain::entities::{Link, LinkTarget, NewLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}

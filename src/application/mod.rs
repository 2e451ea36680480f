//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::id_generator::IdGenerator`] - Collision-checked short id allocation
//! - [`services::link_service::LinkService`] - Shortening, redirects and statistics

pub mod services;

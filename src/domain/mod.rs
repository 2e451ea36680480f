//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Redirect Flow
//!
//! 1. HTTP handler receives redirect request
//! 2. [`repositories::LinkRepository::get`] resolves the target URL
//! 3. [`repositories::LinkRepository::increment_click`] bumps the counter in place
//! 4. Handler returns `303 See Other`

pub mod entities;
pub mod repositories;

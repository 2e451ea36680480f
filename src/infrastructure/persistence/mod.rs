//! Repository implementations.
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - Durable link storage through an SQLx pool
//! - [`MemoryLinkRepository`] - Process-local link storage

pub mod memory_link_repository;
pub mod sqlite_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use sqlite_link_repository::SqliteLinkRepository;

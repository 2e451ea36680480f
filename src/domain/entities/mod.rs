//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A stored short id → URL mapping with its click counter
//! - [`NewLink`] - Input for creating a link
//! - [`LinkTarget`] - The redirect-relevant projection of a link

pub mod link;

pub use link::{Link, LinkTarget, NewLink};

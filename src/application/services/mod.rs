//! Business logic services for the application layer.

pub mod id_generator;
pub mod link_service;

pub use id_generator::IdGenerator;
pub use link_service::LinkService;

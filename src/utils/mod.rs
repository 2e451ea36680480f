//! Utility functions for id generation and URL checks.
//!
//! - [`code_generator`] - Short id candidate generation and shape checks
//! - [`url_validator`] - Scheme and format validation of target URLs

pub mod code_generator;
pub mod url_validator;

//! DTO for the service description endpoint.

use serde::Serialize;
use std::collections::BTreeMap;

/// Static description of the service and its endpoints.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

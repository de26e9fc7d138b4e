//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with service identity.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub environment: String,
    pub host: String,
}

//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service health status and identity.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "qrcode",
///   "version": "0.1.0",
///   "environment": "dev",
///   "host": "qr-7d9f"
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let info = &state.service_info;

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: info.name.clone(),
        version: info.version.clone(),
        environment: info.environment.clone(),
        host: info.host.clone(),
    })
}

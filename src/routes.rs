//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`        - HTML form
//! - `POST /`        - HTML form submission, renders the generated code
//! - `POST /qrcode`  - JSON API
//! - `GET  /health`  - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging tagged with the service identity
//! - **Panic recovery** - Handler panics become `500` responses
//! - **Timeout** - Requests exceeding the deadline get `408 Request Timeout`
//! - **Path normalization** - Trailing slash handling

use std::sync::Arc;
use std::time::Duration;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{recover, tracing};
use crate::state::{AppState, ServiceInfo};
use crate::web;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Builds the router with all routes and middleware, without path normalization.
///
/// Used directly by integration tests; the server wraps it with
/// [`app_router`].
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let service_info = state.service_info.clone();

    let routes = Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::api_routes())
        .merge(web::routes::public_routes())
        .with_state(state);

    with_middleware(routes, service_info, request_timeout)
}

/// Wraps routes in the service middleware stack: timeout, panic recovery
/// and request tracing (outermost).
pub fn with_middleware(
    routes: Router,
    service_info: Arc<ServiceInfo>,
    request_timeout: Duration,
) -> Router {
    routes
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(recover::layer())
        .layer(tracing::layer(service_info))
}

/// Constructs the application router with trailing slashes trimmed.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - per-request deadline
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, request_timeout))
}

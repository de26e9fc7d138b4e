//! API route configuration.

use crate::api::handlers::generate_code_handler;
use crate::api::middleware::content_type;
use crate::state::AppState;
use axum::{Router, middleware, routing::post};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /qrcode` - Generate a QR code (`application/json` body)
///
/// Requests carrying a `Content-Type` other than `application/json` are
/// rejected with `415 Unsupported Media Type`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/qrcode", post(generate_code_handler))
        .route_layer(middleware::from_fn(content_type::require_json))
}

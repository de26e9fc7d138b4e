//! Content-Type guard for JSON endpoints.

use axum::{
    extract::Request,
    http::{HeaderValue, Method, header},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::error::AppError;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Rejects non-GET requests whose `Content-Type` is not `application/json`.
///
/// A missing header is accepted. Media type parameters (`; charset=utf-8`)
/// are ignored and the comparison is case-insensitive.
///
/// # Errors
///
/// Returns `415 Unsupported Media Type` for any other declared content type.
///
/// # Example
///
/// ```rust,ignore
/// let api = Router::new()
///     .route("/qrcode", post(generate_code_handler))
///     .route_layer(middleware::from_fn(content_type::require_json));
/// ```
pub async fn require_json(req: Request, next: Next) -> Result<Response, AppError> {
    if req.method() == Method::GET {
        return Ok(next.run(req).await);
    }

    if let Some(value) = req.headers().get(header::CONTENT_TYPE)
        && !is_json(value)
    {
        return Err(AppError::unsupported_media_type(
            "Content-Type must be application/json",
            json!({ "content_type": value.to_str().unwrap_or_default() }),
        ));
    }

    Ok(next.run(req).await)
}

fn is_json(value: &HeaderValue) -> bool {
    value
        .to_str()
        .ok()
        .and_then(|v| v.split(';').next())
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case(JSON_MEDIA_TYPE))
}

//! Handler for the QR code generation endpoint.

use axum::{Json, body::Bytes, extract::State};
use serde_json::json;
use validator::Validate;

use crate::api::dto::qrcode::{GenerateCodeRequest, GenerateCodeResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Generates a QR code for the given text and data type.
///
/// # Endpoint
///
/// `POST /qrcode`
///
/// # Request Body
///
/// ```json
/// { "text": "555-1234", "data_type": "tel" }
/// ```
///
/// `data_type` is one of `url`, `tel`, `sms`, `email`.
///
/// # Response
///
/// ```json
/// { "code": "iVBORw0KGgoAAAANSUhEUgAAAlgAAAJY..." }
/// ```
///
/// `code` is a 600x600 PNG, standard base64 without padding.
///
/// # Errors
///
/// - **400 Bad Request**: body is not valid JSON
/// - **422 Unprocessable Entity**: empty text, text too long or unsupported data type
/// - **500 Internal Server Error**: encoding failed
///
/// The body is parsed by hand rather than with [`Json`] so that requests
/// without a `Content-Type` header are accepted; wrong content types are
/// rejected earlier by [`crate::api::middleware::content_type`].
pub async fn generate_code_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateCodeResponse>, AppError> {
    let payload: GenerateCodeRequest = serde_json::from_slice(&body).map_err(|e| {
        AppError::bad_request("Invalid JSON body", json!({ "reason": e.to_string() }))
    })?;

    payload.validate()?;

    let code = state.code_service.generate(&payload.into())?;

    Ok(Json(GenerateCodeResponse { code }))
}

//! HTTP error type and JSON error envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::CodeError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors returned by HTTP handlers.
///
/// Every variant renders as
/// `{"error": {"code": ..., "message": ..., "details": ...}}`.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    UnsupportedMediaType { message: String, details: Value },
    Unprocessable { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn unsupported_media_type(message: impl Into<String>, details: Value) -> Self {
        Self::UnsupportedMediaType {
            message: message.into(),
            details,
        }
    }
    pub fn unprocessable(message: impl Into<String>, details: Value) -> Self {
        Self::Unprocessable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable message, safe to show to clients.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::UnsupportedMediaType { message, .. }
            | AppError::Unprocessable { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, details) = match self {
            AppError::Validation { details, .. } => ("validation_error", details),
            AppError::UnsupportedMediaType { details, .. } => ("unsupported_media_type", details),
            AppError::Unprocessable { details, .. } => ("unprocessable_entity", details),
            AppError::Internal { details, .. } => ("internal_error", details),
        };

        ErrorInfo {
            code,
            message: self.message().to_string(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<CodeError> for AppError {
    /// Validation failures become `422`; render failures are logged and
    /// reported as a generic `500`.
    fn from(err: CodeError) -> Self {
        if err.is_validation() {
            return AppError::unprocessable(err.to_string(), json!({}));
        }

        tracing::error!(error = %err, "failed to generate QR code");
        AppError::internal("Something went wrong", json!({}))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "invalid input".to_string());

        AppError::unprocessable(message, json!({ "fields": errors }))
    }
}

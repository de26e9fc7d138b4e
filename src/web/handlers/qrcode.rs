//! QR code form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::qrcode::GenerateCodeRequest;
use crate::domain::DataType;
use crate::error::AppError;
use crate::state::AppState;

/// Option of the data type `<select>`.
pub struct DataTypeOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

fn data_type_options(selected: &str) -> Vec<DataTypeOption> {
    DataType::ALL
        .iter()
        .map(|dt| DataTypeOption {
            value: dt.as_str(),
            label: match dt {
                DataType::Url => "URL",
                DataType::Tel => "Phone",
                DataType::Sms => "SMS",
                DataType::Email => "Email",
            },
            selected: dt.as_str() == selected,
        })
        .collect()
}

/// Template for the QR code page.
///
/// Renders `templates/qr.html` with:
/// - Text input and data type selector, pre-filled with the last submission
/// - The generated code as an inline PNG, if any
/// - An error message, if any
#[derive(Template, WebTemplate)]
#[template(path = "qr.html")]
pub struct QrTemplate {
    pub text: String,
    pub options: Vec<DataTypeOption>,
    pub code: String,
    pub error: String,
}

impl QrTemplate {
    /// Empty form.
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            options: data_type_options(DataType::Url.as_str()),
            code: String::new(),
            error: String::new(),
        }
    }

    fn with_code(text: String, data_type: &str, code: String) -> Self {
        Self {
            text,
            options: data_type_options(data_type),
            code,
            error: String::new(),
        }
    }

    fn with_error(text: String, data_type: &str, error: &str) -> Self {
        Self {
            text,
            options: data_type_options(data_type),
            code: String::new(),
            error: error.to_string(),
        }
    }
}

/// Renders the empty form.
///
/// # Endpoint
///
/// `GET /`
pub async fn show_form_handler() -> impl IntoResponse {
    QrTemplate::empty()
}

/// Generates a QR code from the submitted form and renders it inline.
///
/// # Endpoint
///
/// `POST /` (`application/x-www-form-urlencoded`, fields `text` and `data_type`)
///
/// # Response Codes
///
/// - **200 OK**: page with the generated code
/// - **400 Bad Request**: form body could not be parsed
/// - **422 Unprocessable Entity**: page with the validation message
/// - **500 Internal Server Error**: page with a generic message
pub async fn generate_form_handler(
    State(state): State<AppState>,
    form: Result<Form<GenerateCodeRequest>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            tracing::info!(error = %rejection, "failed to parse form");
            return (
                StatusCode::BAD_REQUEST,
                QrTemplate::with_error(String::new(), "", "Something went wrong"),
            )
                .into_response();
        }
    };

    let text = form.text.clone();
    let data_type = form.data_type.clone();

    match generate(&state, form) {
        Ok(code) => QrTemplate::with_code(text, &data_type, code).into_response(),
        Err(err) => (
            err.status(),
            QrTemplate::with_error(text, &data_type, err.message()),
        )
            .into_response(),
    }
}

fn generate(state: &AppState, form: GenerateCodeRequest) -> Result<String, AppError> {
    form.validate()?;
    Ok(state.code_service.generate(&form.into())?)
}

//! DTOs for the QR code generation endpoint.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::CodeRequest;

/// Maximum accepted length of `text`, in bytes.
///
/// Level `H` symbols hold at most 1273 bytes, minus room for the longest
/// scheme prefix (`mailto:`).
pub const MAX_TEXT_BYTES: usize = 1266;

/// Request to generate a QR code.
///
/// Both fields default to an empty string when absent or `null`; emptiness
/// and unknown tags are rejected by [`CodeRequest::resolve`].
#[derive(Debug, Default, Deserialize, Validate)]
pub struct GenerateCodeRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_text_bytes"))]
    pub text: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub data_type: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn validate_text_bytes(text: &str) -> Result<(), ValidationError> {
    if text.len() > MAX_TEXT_BYTES {
        return Err(ValidationError::new("length").with_message(Cow::Borrowed("input is too long")));
    }
    Ok(())
}

impl From<GenerateCodeRequest> for CodeRequest {
    fn from(req: GenerateCodeRequest) -> Self {
        CodeRequest::new(req.text, req.data_type)
    }
}

/// Generated QR code.
#[derive(Debug, Serialize)]
pub struct GenerateCodeResponse {
    /// PNG image, standard base64 without padding.
    pub code: String,
}

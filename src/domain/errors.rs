//! Domain error types.

/// Errors produced while turning a [`CodeRequest`](super::CodeRequest) into a QR code.
///
/// [`CodeError::Required`] and [`CodeError::UnsupportedDataType`] are caller
/// errors; [`CodeError::Render`] is an infrastructure failure.
#[derive(Debug, thiserror::Error)]
pub enum CodeError {
    #[error("input is required")]
    Required,

    #[error("unsupported data type")]
    UnsupportedDataType,

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl CodeError {
    /// Returns `true` for errors caused by the request itself.
    pub fn is_validation(&self) -> bool {
        matches!(self, CodeError::Required | CodeError::UnsupportedDataType)
    }
}

/// Errors raised by a [`CodeRenderer`](super::CodeRenderer) implementation.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to encode qr code: {0}")]
    Encode(String),

    #[error("failed to resize qr code: {modules} modules do not fit into {size}px")]
    TooLarge { modules: u32, size: u32 },

    #[error("failed to encode to png: {0}")]
    Png(String),
}

//! QR code generation service.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD_NO_PAD;

use crate::domain::{CodeError, CodeRenderer, CodeRequest};

/// Service turning [`CodeRequest`]s into base64-encoded PNG QR codes.
///
/// Resolution rules live in [`CodeRequest::resolve`]; the image work is
/// delegated to the injected [`CodeRenderer`].
#[derive(Clone)]
pub struct CodeService {
    renderer: Arc<dyn CodeRenderer>,
}

impl CodeService {
    /// Creates a new code service.
    pub fn new(renderer: Arc<dyn CodeRenderer>) -> Self {
        Self { renderer }
    }

    /// Generates a QR code for the request.
    ///
    /// Returns the PNG image encoded as standard base64 without padding.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::Required`] or [`CodeError::UnsupportedDataType`]
    /// for invalid requests, and [`CodeError::Render`] if encoding fails.
    pub fn generate(&self, request: &CodeRequest) -> Result<String, CodeError> {
        let content = request.resolve()?;
        let png = self.renderer.render_png(&content)?;

        Ok(STANDARD_NO_PAD.encode(png))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MockCodeRenderer, RenderError};

    #[test]
    fn test_generate_renders_resolved_text() {
        let mut renderer = MockCodeRenderer::new();
        renderer
            .expect_render_png()
            .withf(|content| content == "mailto:a@b.com")
            .times(1)
            .returning(|_| Ok(vec![1, 2, 3, 4]));

        let service = CodeService::new(Arc::new(renderer));
        let code = service
            .generate(&CodeRequest::new("a@b.com", "email"))
            .unwrap();

        // [1, 2, 3, 4] is "AQIDBA==" with padding.
        assert_eq!(code, "AQIDBA");
    }

    #[test]
    fn test_generate_validation_error_skips_renderer() {
        let mut renderer = MockCodeRenderer::new();
        renderer.expect_render_png().times(0);

        let service = CodeService::new(Arc::new(renderer));

        let err = service.generate(&CodeRequest::new("", "url")).unwrap_err();
        assert!(matches!(err, CodeError::Required));

        let err = service
            .generate(&CodeRequest::new("hello", "fax"))
            .unwrap_err();
        assert!(matches!(err, CodeError::UnsupportedDataType));
    }

    #[test]
    fn test_generate_wraps_render_failure() {
        let mut renderer = MockCodeRenderer::new();
        renderer
            .expect_render_png()
            .times(1)
            .returning(|_| Err(RenderError::Png("disk full".to_string())));

        let service = CodeService::new(Arc::new(renderer));
        let err = service
            .generate(&CodeRequest::new("https://example.com", "url"))
            .unwrap_err();

        assert!(matches!(err, CodeError::Render(RenderError::Png(_))));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_generate_with_png_renderer() {
        use crate::infrastructure::qr::PngQrRenderer;

        let service = CodeService::new(Arc::new(PngQrRenderer::default()));
        let code = service
            .generate(&CodeRequest::new("555-1234", "tel"))
            .unwrap();

        assert!(!code.ends_with('='));
        let png = STANDARD_NO_PAD.decode(&code).unwrap();
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!((img.width(), img.height()), (600, 600));
    }
}

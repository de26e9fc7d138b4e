//! Rendering seam between the domain and the QR/imaging libraries.

use crate::domain::errors::RenderError;

/// Default edge length of generated codes, in pixels.
///
/// 601px is the small-screen breakpoint for `@media` queries, so a 600px
/// image displays at full size on mobile devices without compression.
pub const DEFAULT_QR_SIZE: u32 = 600;

/// Turns resolved payload text into an encoded image.
///
/// # Implementations
///
/// - [`crate::infrastructure::qr::PngQrRenderer`] - `qrcode` + `image` PNG renderer
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait CodeRenderer: Send + Sync {
    /// Encodes `content` as a QR symbol and returns the PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the content does not fit in a QR symbol
    /// or the image cannot be serialized.
    fn render_png(&self, content: &str) -> Result<Vec<u8>, RenderError>;
}

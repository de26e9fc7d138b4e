//! QR code rendering backed by the `qrcode` and `image` crates.

mod png_renderer;

pub use png_renderer::PngQrRenderer;

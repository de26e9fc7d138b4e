//! PNG implementation of [`CodeRenderer`].

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, GrayImage, ImageEncoder, Luma};
use qrcode::{Color, EcLevel, QrCode};

use crate::domain::{CodeRenderer, DEFAULT_QR_SIZE, RenderError};

const DARK: Luma<u8> = Luma([0u8]);
const LIGHT: Luma<u8> = Luma([255u8]);

/// Renders QR codes as square grayscale PNG images of a fixed size.
///
/// The symbol is encoded at error-correction level `H` with the version
/// picked automatically. Modules are scaled by the largest integer factor
/// that fits the target size and the symbol is centered on a white
/// background, so every output is exactly `size x size` pixels.
#[derive(Debug, Clone)]
pub struct PngQrRenderer {
    size: u32,
    ec_level: EcLevel,
}

impl PngQrRenderer {
    /// Creates a renderer producing `size x size` images.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            ec_level: EcLevel::H,
        }
    }

    /// Edge length of generated images, in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    fn rasterize(&self, code: &QrCode) -> Result<GrayImage, RenderError> {
        let modules = code.width() as u32;
        let scale = self.size / modules.max(1);
        if scale == 0 {
            return Err(RenderError::TooLarge {
                modules,
                size: self.size,
            });
        }

        let offset = (self.size - modules * scale) / 2;
        let mut img = GrayImage::from_pixel(self.size, self.size, LIGHT);

        for (i, color) in code.to_colors().iter().enumerate() {
            if *color != Color::Dark {
                continue;
            }
            let x = (i as u32 % modules) * scale + offset;
            let y = (i as u32 / modules) * scale + offset;
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(x + dx, y + dy, DARK);
                }
            }
        }

        Ok(img)
    }
}

impl Default for PngQrRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_QR_SIZE)
    }
}

impl CodeRenderer for PngQrRenderer {
    fn render_png(&self, content: &str) -> Result<Vec<u8>, RenderError> {
        let code = QrCode::with_error_correction_level(content.as_bytes(), self.ec_level)
            .map_err(|e| RenderError::Encode(e.to_string()))?;

        let img = self.rasterize(&code)?;

        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::L8)
            .map_err(|e| RenderError::Png(e.to_string()))?;

        Ok(png)
    }
}

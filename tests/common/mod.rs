#![allow(dead_code)]

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use image::DynamicImage;
use qrcode_service::application::services::CodeService;
use qrcode_service::infrastructure::qr::PngQrRenderer;
use qrcode_service::state::{AppState, ServiceInfo};
use std::sync::Arc;

pub const TEST_ENVIRONMENT: &str = "test";
pub const TEST_HOST: &str = "test-host";

pub fn create_test_state() -> AppState {
    let renderer = Arc::new(PngQrRenderer::default());
    let code_service = Arc::new(CodeService::new(renderer));

    AppState::new(code_service, ServiceInfo::new(TEST_ENVIRONMENT, TEST_HOST))
}

/// Decodes a base64 (no padding) PNG as returned by the service.
pub fn decode_code(code: &str) -> DynamicImage {
    let png = STANDARD_NO_PAD.decode(code).unwrap();
    image::load_from_memory_with_format(&png, image::ImageFormat::Png).unwrap()
}

//! HTTP request handlers for API endpoints.

pub mod health;
pub mod qrcode;

pub use health::health_handler;
pub use qrcode::generate_code_handler;

//! Application layer services.
//!
//! # Available Services
//!
//! - [`services::code_service::CodeService`] - Request resolution, rendering and base64 output

pub mod services;

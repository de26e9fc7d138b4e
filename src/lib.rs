//! # QR Code Service
//!
//! A small HTTP service that turns URLs, phone numbers, e-mail addresses and
//! SMS targets into 600x600 PNG QR codes, returned as base64 either in JSON
//! or embedded in an HTML page.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Code requests, scheme-prefix resolution, renderer trait
//! - **Application Layer** ([`application`]) - Code generation service
//! - **Infrastructure Layer** ([`infrastructure`]) - `qrcode` + `image` PNG renderer
//! - **API Layer** ([`api`]) - JSON API handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - HTML form
//!
//! ## Data Types
//!
//! | Tag     | Encoded text        |
//! |---------|---------------------|
//! | `url`   | `text`              |
//! | `tel`   | `tel:` + `text`     |
//! | `email` | `mailto:` + `text`  |
//! | `sms`   | `smsto:` + `text`   |
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- --listen 127.0.0.1:8080
//!
//! curl -s localhost:8080/qrcode \
//!     -H 'Content-Type: application/json' \
//!     -d '{"text": "555-1234", "data_type": "tel"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::CodeService;
    pub use crate::domain::{CodeError, CodeRenderer, CodeRequest, DataType, RenderError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::qr::PngQrRenderer;
    pub use crate::state::{AppState, ServiceInfo};
}

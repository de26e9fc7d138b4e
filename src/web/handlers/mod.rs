//! HTML template rendering handlers.

mod qrcode;

pub use qrcode::{QrTemplate, generate_form_handler, show_form_handler};

//! Infrastructure layer: implementations of domain traits on top of
//! external libraries.
//!
//! - [`qr`] - QR symbol encoding (`qrcode`) and PNG rasterization (`image`)

pub mod qr;

//! Domain layer: the code request model, its resolution rules and the
//! rendering contract.
//!
//! # Architecture
//!
//! - [`code_request`] - [`CodeRequest`] and [`DataType`], scheme-prefix resolution
//! - [`renderer`] - [`CodeRenderer`] trait implemented by the infrastructure layer
//! - [`errors`] - [`CodeError`] and [`RenderError`]
//!
//! The domain layer has no dependencies on HTTP, imaging or QR libraries.

pub mod code_request;
pub mod errors;
pub mod renderer;

pub use code_request::{CodeRequest, DataType};
pub use errors::{CodeError, RenderError};
pub use renderer::{CodeRenderer, DEFAULT_QR_SIZE};

#[cfg(test)]
pub use renderer::MockCodeRenderer;

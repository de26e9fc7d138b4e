//! Business logic services for the application layer.

pub mod code_service;

pub use code_service::CodeService;

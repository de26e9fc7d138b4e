//! HTTP middleware for request processing and protection.
//!
//! Provides content negotiation, panic recovery and observability middleware.

pub mod content_type;
pub mod recover;
pub mod tracing;

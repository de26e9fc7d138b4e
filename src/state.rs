//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::CodeService;

/// Identity of the running service instance.
///
/// Attached to request spans and reported by the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub environment: String,
    pub host: String,
}

impl ServiceInfo {
    /// Service identity for this build, deployed to `environment` on `host`.
    pub fn new(environment: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            name: "qrcode".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: environment.into(),
            host: host.into(),
        }
    }
}

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub code_service: Arc<CodeService>,
    pub service_info: Arc<ServiceInfo>,
}

impl AppState {
    pub fn new(code_service: Arc<CodeService>, service_info: ServiceInfo) -> Self {
        Self {
            code_service,
            service_info: Arc::new(service_info),
        }
    }
}

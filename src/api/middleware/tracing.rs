//! HTTP request/response tracing middleware.

use std::sync::Arc;

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

use crate::state::ServiceInfo;

/// Builds request spans tagged with the service identity.
#[derive(Debug, Clone)]
pub struct ServiceSpan {
    info: Arc<ServiceInfo>,
}

impl ServiceSpan {
    pub fn new(info: Arc<ServiceInfo>) -> Self {
        Self { info }
    }
}

impl<B> MakeSpan<B> for ServiceSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
            service = %self.info.name,
            service_version = %self.info.version,
            environment = %self.info.environment,
        )
    }
}

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// **On Request:**
/// - Creates a span at `INFO` level with:
///   - HTTP method, URI path and HTTP version
///   - service name, version and environment
///
/// **On Response:**
/// - Logs at `INFO` level with:
///   - Status code
///   - Latency in milliseconds
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/qrcode version=HTTP/1.1 service=qrcode service_version=0.1.0 environment=dev}: finished processing request latency=4 ms status=200
/// ```
pub fn layer(
    info: Arc<ServiceInfo>,
) -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, ServiceSpan> {
    TraceLayer::new_for_http()
        .make_span_with(ServiceSpan::new(info))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

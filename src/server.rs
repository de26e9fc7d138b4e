//! HTTP server initialization and runtime setup.
//!
//! Handles service wiring, the Axum server lifecycle, signal handling and
//! graceful shutdown.

use crate::application::services::CodeService;
use crate::config::Config;
use crate::infrastructure::qr::PngQrRenderer;
use crate::routes::app_router;
use crate::state::{AppState, ServiceInfo};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::oneshot;

/// Builds the application state around the production renderer.
pub fn build_state(service_info: ServiceInfo) -> AppState {
    let renderer = Arc::new(PngQrRenderer::default());
    let code_service = Arc::new(CodeService::new(renderer));

    AppState::new(code_service, service_info)
}

/// Runs the HTTP server with the given configuration and service identity.
///
/// Serves until the listener fails or a shutdown signal (SIGINT/SIGTERM)
/// arrives. After a signal, in-flight requests get
/// [`Config::shutdown_timeout`] to finish before the server is aborted.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config, service_info: ServiceInfo) -> Result<()> {
    let state = build_state(service_info);
    let app = app_router(state, config.request_timeout());

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, "starting http server");

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(async {
            let _ = stop_rx.await;
        });
    let mut handle = tokio::spawn(async move { server.await });

    tokio::select! {
        res = &mut handle => {
            res.context("HTTP server task failed")?
                .context("HTTP server error")?;
        }
        sig = shutdown_signal() => {
            tracing::info!(signal = sig, "shutdown signal received");
            tracing::info!(%addr, "shutting down http server");
            let _ = stop_tx.send(());

            match tokio::time::timeout(config.shutdown_timeout(), &mut handle).await {
                Ok(res) => {
                    res.context("HTTP server task failed")?
                        .context("HTTP server error")?;
                }
                Err(_) => {
                    tracing::warn!(
                        timeout_secs = config.shutdown_timeout_secs,
                        "failed to gracefully shutdown, closing connections"
                    );
                    handle.abort();
                }
            }
        }
    }

    tracing::info!("http server stopped");
    Ok(())
}

/// Resolves with the name of the first termination signal received.
async fn shutdown_signal() -> &'static str {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => "SIGINT",
        _ = terminate => "SIGTERM",
    }
}

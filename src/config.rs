//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, optionally overridden by
//! command-line flags, and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `APP_ENV` - Deployment environment reported in logs (default: `dev`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `json`)
//! - `SHUTDOWN_TIMEOUT_SECS` - Time allowed for graceful shutdown (default: 10)
//! - `REQUEST_TIMEOUT_SECS` - Per-request deadline (default: 10)
//! - `HOSTNAME` - Host name reported in logs and `/health` (default: the system
//!   host name, or `localhost` if it cannot be read)

use anyhow::Result;
use std::env;
use std::time::Duration;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub environment: String,
    pub log_level: String,
    pub log_format: String,
    /// Time allowed for in-flight requests to finish after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    /// Requests running longer than this are answered with `408 Request Timeout`.
    pub request_timeout_secs: u64,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            environment: "dev".to_string(),
            log_level: "info".to_string(),
            log_format: "json".to_string(),
            shutdown_timeout_secs: 10,
            request_timeout_secs: 10,
            host: "localhost".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let environment = env::var("APP_ENV").unwrap_or(defaults.environment);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let shutdown_timeout_secs = env::var("SHUTDOWN_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.shutdown_timeout_secs);

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.request_timeout_secs);

        let host = env::var("HOSTNAME")
            .ok()
            .filter(|h| !h.is_empty())
            .or_else(system_hostname)
            .unwrap_or(defaults.host);

        Self {
            listen_addr,
            environment,
            log_level,
            log_format,
            shutdown_timeout_secs,
            request_timeout_secs,
            host,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `environment` is empty
    /// - `log_format` is not `text` or `json`
    /// - either timeout is zero
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.environment.trim().is_empty() {
            anyhow::bail!("APP_ENV must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.shutdown_timeout_secs == 0 {
            anyhow::bail!("SHUTDOWN_TIMEOUT_SECS must be greater than 0");
        }

        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Environment: {}", self.environment);
        tracing::info!("  Host: {}", self.host);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Request timeout: {}s", self.request_timeout_secs);
        tracing::info!("  Shutdown timeout: {}s", self.shutdown_timeout_secs);
    }
}

/// Host name reported by the operating system, if it is valid UTF-8 and non-empty.
fn system_hostname() -> Option<String> {
    gethostname::gethostname()
        .into_string()
        .ok()
        .filter(|h| !h.is_empty())
}

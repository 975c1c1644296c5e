//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default so an empty file (or no file) is a valid config.

use serde::{Deserialize, Serialize};

/// Default upstream API host.
pub const DEFAULT_BASE_URL: &str = "https://api.green-api.com";

/// Default listening port when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8080;

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (host, port).
    pub listener: ListenerConfig,

    /// Upstream API settings.
    pub upstream: UpstreamConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind.
    pub host: String,

    /// Port to bind. Overridden by `PORT`.
    pub port: u16,
}

impl ListenerConfig {
    /// `host:port` as passed to the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Upstream API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Scheme and host that prefix every upstream URL.
    pub base_url: String,

    /// Total request timeout in seconds. `None` keeps the client default.
    pub timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

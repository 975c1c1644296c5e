//! Structured logging.
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to this
//! crate and to `tower_http` request spans.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Filter directive derived from the configured level.
pub fn default_directive(config: &ObservabilityConfig) -> String {
    format!(
        "green_api_relay={level},tower_http={level}",
        level = config.log_level
    )
}

/// Install the global subscriber. Safe to call once per process.
pub fn init_logging(config: &ObservabilityConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(config).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

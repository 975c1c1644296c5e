//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the upstream base URL and value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::RelayConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("upstream.base_url {url:?} is not a valid URL: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("upstream.base_url scheme must be http or https, got {0:?}")]
    UnsupportedScheme(String),

    #[error("upstream.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("observability.metrics_address {0:?} is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Check a parsed configuration.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.upstream.base_url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
            }
        }
        Err(e) => errors.push(ValidationError::InvalidBaseUrl {
            url: config.upstream.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.upstream.timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid PORT value {0:?}")]
    InvalidPort(String),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from an optional TOML file, then apply process
/// environment overrides and validate.
pub fn load_config(path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => RelayConfig::default(),
    };

    let config = apply_env_overrides(config, |key| std::env::var(key).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
///
/// `PORT` replaces the listener port when set to a non-empty value.
pub fn apply_env_overrides<F>(mut config: RelayConfig, lookup: F) -> Result<RelayConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup("PORT").filter(|p| !p.is_empty()) {
        config.listener.port = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
    }

    Ok(config)
}

//! Upstream error definitions.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while calling the upstream API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The outbound HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The templated URL did not parse.
    #[error("invalid upstream URL")]
    InvalidUrl(#[source] url::ParseError),

    /// The request body could not be serialized.
    #[error("failed to encode request body")]
    Encode(#[source] serde_json::Error),

    /// Connection, DNS, TLS or timeout failure.
    #[error("upstream request failed")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered with anything other than 200.
    #[error("HTTP error! Status: {0}")]
    Status(StatusCode),

    /// Upstream body was not valid JSON.
    #[error("invalid JSON in upstream response")]
    Decode(#[source] serde_json::Error),
}

impl UpstreamError {
    /// Render the error and its source chain as one line.
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            message.push_str(": ");
            message.push_str(&err.to_string());
            source = err.source();
        }
        message
    }

    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Client(_) => "client",
            UpstreamError::InvalidUrl(_) => "invalid_url",
            UpstreamError::Encode(_) => "encode",
            UpstreamError::Transport(_) => "transport",
            UpstreamError::Status(_) => "status",
            UpstreamError::Decode(_) => "decode",
        }
    }
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

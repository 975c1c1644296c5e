//! Outbound HTTP client for the upstream API.
//!
//! # Responsibilities
//! - Own the single pooled `reqwest::Client` shared by all requests
//! - Send one request per relayed call (no retries)
//! - Accept only HTTP 200 with a JSON body as success

use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde_json::{Map, Value};
use tracing::Level;
use url::Url;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::routing::Operation;
use crate::upstream::error::{UpstreamError, UpstreamResult};
use crate::upstream::template::build_url;
use crate::upstream::Credentials;

/// How much of a rejected upstream body is kept for debug logs.
const ERROR_BODY_PREVIEW: usize = 512;

/// Invoker for the upstream API.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Build the client from configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(UpstreamError::Client)?;

        Ok(Self::with_client(http, &config.base_url))
    }

    /// Wrap an existing client.
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call `op` on behalf of the given instance.
    pub async fn invoke(
        &self,
        op: Operation,
        credentials: &Credentials,
        body: Option<&Map<String, Value>>,
    ) -> UpstreamResult<Value> {
        let url = build_url(&self.base_url, credentials, op);
        let start = Instant::now();

        tracing::debug!(
            operation = %op,
            id_instance = %credentials.id_instance,
            has_body = body.is_some(),
            "Invoking upstream"
        );

        let result = self.fetch(&url, op.method(), body).await;
        metrics::record_upstream_duration(op.name(), start);
        result
    }

    /// Perform a single upstream call and decode the JSON response.
    pub async fn fetch(
        &self,
        url: &str,
        method: Method,
        body: Option<&Map<String, Value>>,
    ) -> UpstreamResult<Value> {
        let url = Url::parse(url).map_err(UpstreamError::InvalidUrl)?;

        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(UpstreamError::Encode)?;
            request = request.header(CONTENT_TYPE, "application/json").body(payload);
        }

        // The URL carries the access token, keep it out of error text.
        let response = request
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url()))?;

        let status = response.status();
        if status != StatusCode::OK {
            if tracing::enabled!(Level::DEBUG) {
                let preview = error_preview(response).await;
                tracing::debug!(
                    status = %status,
                    body = %String::from_utf8_lossy(&preview),
                    "Upstream rejected request"
                );
            }
            return Err(UpstreamError::Status(status));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url()))?;

        serde_json::from_slice(&bytes).map_err(UpstreamError::Decode)
    }
}

/// Read at most `ERROR_BODY_PREVIEW` bytes of a rejected response.
async fn error_preview(mut response: reqwest::Response) -> Vec<u8> {
    let mut preview = Vec::with_capacity(ERROR_BODY_PREVIEW);
    while preview.len() < ERROR_BODY_PREVIEW {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                let take = chunk.len().min(ERROR_BODY_PREVIEW - preview.len());
                preview.extend_from_slice(&chunk[..take]);
            }
            Ok(None) | Err(_) => break,
        }
    }
    preview
}

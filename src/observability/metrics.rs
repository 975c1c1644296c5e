//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): relayed requests by operation, outcome
//! - `relay_upstream_duration_seconds` (histogram): upstream call latency
//!
//! Recording is a no-op until a recorder is installed.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Outcome label for a relayed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    UpstreamError,
    BadRequest,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::UpstreamError => "upstream_error",
            Outcome::BadRequest => "bad_request",
        }
    }
}

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(operation: &'static str, outcome: Outcome) {
    counter!(
        "relay_requests_total",
        "operation" => operation,
        "outcome" => outcome.as_str()
    )
    .increment(1);
}

pub fn record_upstream_duration(operation: &'static str, start: Instant) {
    histogram!("relay_upstream_duration_seconds", "operation" => operation)
        .record(start.elapsed().as_secs_f64());
}

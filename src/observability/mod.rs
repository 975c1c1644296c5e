//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers / upstream client produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through the request span
//! - Access tokens are never logged

pub mod logging;
pub mod metrics;

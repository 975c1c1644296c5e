//! Upstream invoker subsystem.
//!
//! # Data Flow
//! ```text
//! (Operation, Credentials, Option<body>)
//!     → template.rs (URL substitution)
//!     → client.rs (single HTTP call, status check, JSON decode)
//!     → Result<Value, UpstreamError>
//! ```
//!
//! # Design Decisions
//! - One pooled client per process, cloned cheaply into handlers
//! - No retries: the first failure is the answer
//! - Errors are flattened into a single message for the envelope

pub mod client;
pub mod credentials;
pub mod error;
pub mod template;

pub use client::UpstreamClient;
pub use credentials::Credentials;
pub use error::{UpstreamError, UpstreamResult};
pub use template::build_url;

//! Green API Relay Library
//!
//! A small HTTP relay in front of the Green API messaging service. Four
//! operations are forwarded (`getSettings`, `getStateInstance`,
//! `sendMessage`, `sendFileByUrl`) and every upstream answer is reshaped into
//! a uniform `{result, error}` envelope.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod upstream;

pub use config::RelayConfig;
pub use http::{Envelope, RelayServer};
pub use lifecycle::Shutdown;
pub use routing::Operation;

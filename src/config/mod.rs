//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (PORT)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow running with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::RelayConfig;
pub use schema::UpstreamConfig;

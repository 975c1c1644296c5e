//! Route table.
//!
//! # Data Flow
//! ```text
//! inbound path (/sendMessage)
//!     → operation.rs (Operation::from_path)
//!     → (upstream name "sendMessage", method POST)
//!     → upstream invoker
//! ```
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Total over the supported route set; unknown paths never reach upstream

pub mod operation;

pub use operation::Operation;

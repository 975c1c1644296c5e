//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing span)
//!     → handlers.rs (credentials, body decode, dispatch)
//!     → [upstream invoker] (one call per request)
//!     → response.rs (Envelope, serialized as JSON)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::Envelope;
pub use server::{AppState, RelayServer};

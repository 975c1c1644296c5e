//! Request handling.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the caller sent none
//! - Decode optional JSON object bodies for POST operations
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Body decoding never touches the upstream; failures stop the request

use axum::http::{HeaderName, HeaderValue, Request};
use serde_json::{Map, Value};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID in both directions.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV4;

impl MakeRequestId for MakeRequestUuidV4 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Decode a caller-supplied body into a JSON object.
///
/// An empty body, whitespace, or a literal `null` means "no body".
pub fn decode_body(bytes: &[u8]) -> Result<Option<Map<String, Value>>, serde_json::Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(bytes)
}

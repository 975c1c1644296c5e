//! Request dispatcher.
//!
//! One call per inbound request: extract credentials, decode the body when
//! the operation carries one, invoke upstream, wrap the outcome.

use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::http::request::decode_body;
use crate::http::response::Envelope;
use crate::http::server::AppState;
use crate::observability::metrics::{self, Outcome};
use crate::routing::Operation;
use crate::upstream::Credentials;

/// Relay `op` to the upstream API.
///
/// Malformed bodies answer 400 with the decoder message and never reach
/// upstream. Everything else answers 200 with an [`Envelope`].
pub async fn relay(state: AppState, op: Operation, query: Option<String>, body: Bytes) -> Response {
    let credentials = Credentials::from_query(query.as_deref());

    let payload = if op.accepts_body() {
        match decode_body(&body) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(operation = %op, error = %e, "Malformed request body");
                metrics::record_request(op.name(), Outcome::BadRequest);
                return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
            }
        }
    } else {
        None
    };

    let outcome = state
        .upstream
        .invoke(op, &credentials, payload.as_ref())
        .await;

    match &outcome {
        Ok(_) => metrics::record_request(op.name(), Outcome::Ok),
        Err(e) => {
            tracing::warn!(
                operation = %op,
                id_instance = %credentials.id_instance,
                kind = e.kind(),
                error = %e.describe(),
                "Upstream call failed"
            );
            metrics::record_request(op.name(), Outcome::UpstreamError);
        }
    }

    (StatusCode::OK, Json(Envelope::from(outcome))).into_response()
}

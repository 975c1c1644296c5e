//! Response envelope.
//!
//! Every relayed call answers with the same JSON shape:
//! `{"result": <upstream JSON or null>, "error": "<message>"}`, where `error`
//! is present only when the upstream call failed.

use serde::Serialize;
use serde_json::Value;

use crate::upstream::UpstreamError;

/// Uniform wrapper around an upstream outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    /// Decoded upstream body. Serialized as `null` when absent.
    pub result: Option<Value>,

    /// Failure description. Omitted on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    pub fn success(result: Value) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            result: None,
            error: Some(error.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl From<Result<Value, UpstreamError>> for Envelope {
    fn from(outcome: Result<Value, UpstreamError>) -> Self {
        match outcome {
            Ok(value) => Envelope::success(value),
            Err(e) => Envelope::failure(e.describe()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;

    #[test]
    fn test_success_omits_error() {
        let envelope = Envelope::success(json!({"stateInstance": "authorized"}));
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"result":{"stateInstance":"authorized"}}"#
        );
    }

    #[test]
    fn test_failure_has_null_result() {
        let envelope: Envelope = Err(UpstreamError::Status(StatusCode::BAD_GATEWAY)).into();
        assert!(envelope.is_error());
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"result": null, "error": "HTTP error! Status: 502 Bad Gateway"})
        );
    }

    #[test]
    fn test_scalar_result() {
        let envelope: Envelope = Ok(json!(true)).into();
        assert_eq!(serde_json::to_string(&envelope).unwrap(), r#"{"result":true}"#);
    }
}

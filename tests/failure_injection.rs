//! Failure injection tests for the relay.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::Value;

use green_api_relay::Operation;

mod common;

async fn call(relay: &common::RunningRelay, op: Operation, body: &str) -> (StatusCode, String) {
    let client = common::http_client();
    let url = relay.url(&format!("{}?idInstance=1101&apiTokenInstance=tok", op.path()));
    let request = if op.accepts_body() {
        client.post(url).body(body.to_string())
    } else {
        client.get(url)
    };
    let res = request.send().await.expect("Relay unreachable");
    let status = res.status();
    (status, res.text().await.unwrap())
}

fn envelope_error(text: &str) -> String {
    let envelope: Value = serde_json::from_str(text).expect("envelope must be JSON");
    assert!(envelope["result"].is_null(), "result should be null: {}", text);
    envelope["error"]
        .as_str()
        .expect("error should be a string")
        .to_string()
}

#[tokio::test]
async fn test_non_200_status_for_every_route() {
    let upstream = common::start_fixed_upstream(500, r#"{"message":"instance is down"}"#).await;
    let relay = common::start_relay(&upstream.base_url()).await;

    for op in Operation::ALL {
        let (status, text) = call(&relay, op, "{}").await;
        assert_eq!(status, StatusCode::OK, "{}", op);
        assert_eq!(
            envelope_error(&text),
            "HTTP error! Status: 500 Internal Server Error"
        );
    }
}

#[tokio::test]
async fn test_non_200_success_code_is_still_an_error() {
    let upstream = common::start_fixed_upstream(201, "{}").await;
    let relay = common::start_relay(&upstream.base_url()).await;

    let (status, text) = call(&relay, Operation::SendMessage, "{}").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope_error(&text), "HTTP error! Status: 201 Created");
}

#[tokio::test]
async fn test_network_failure_for_every_route() {
    let relay = common::start_relay(&common::closed_upstream_url().await).await;

    for op in Operation::ALL {
        let (status, text) = call(&relay, op, "{}").await;
        assert_eq!(status, StatusCode::OK, "{}", op);

        let error = envelope_error(&text);
        assert!(error.starts_with("upstream request failed"), "{}", error);
        assert!(!error.contains("tok"), "token leaked: {}", error);
    }
}

#[tokio::test]
async fn test_malformed_upstream_json_for_every_route() {
    let upstream = common::start_fixed_upstream(200, "<html>maintenance</html>").await;
    let relay = common::start_relay(&upstream.base_url()).await;

    for op in Operation::ALL {
        let (status, text) = call(&relay, op, "{}").await;
        assert_eq!(status, StatusCode::OK, "{}", op);
        assert!(envelope_error(&text).starts_with("invalid JSON in upstream response: "));
    }
}

#[tokio::test]
async fn test_malformed_body_never_reaches_upstream() {
    let call_count = Arc::new(AtomicU32::new(0));
    let cc = call_count.clone();
    let upstream = common::start_mock_upstream(move |_| {
        cc.fetch_add(1, Ordering::SeqCst);
        (200, "{}".to_string())
    })
    .await;
    let relay = common::start_relay(&upstream.base_url()).await;

    let expected = serde_json::from_str::<Option<serde_json::Map<String, Value>>>(r#"{"chatId":"#)
        .unwrap_err()
        .to_string();

    for op in [Operation::SendMessage, Operation::SendFileByUrl] {
        let (status, text) = call(&relay, op, r#"{"chatId":"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", op);
        assert_eq!(text, expected);
    }

    let (status, text) = call(&relay, Operation::SendMessage, "[\"not\", \"an object\"]").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(text.contains("invalid type"), "{}", text);

    assert_eq!(call_count.load(Ordering::SeqCst), 0, "no upstream call expected");
    assert_eq!(upstream.call_count(), 0);
}

#[tokio::test]
async fn test_concatenated_upstream_json_is_an_error() {
    let upstream = common::start_fixed_upstream(200, "{\"a\":1}\n{\"b\":2}").await;
    let relay = common::start_relay(&upstream.base_url()).await;

    let (status, text) = call(&relay, Operation::GetSettings, "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(envelope_error(&text)
        .starts_with("invalid JSON in upstream response: trailing characters"));
}

#[tokio::test]
async fn test_large_error_body_still_maps_to_status() {
    let upstream = common::start_mock_upstream(|_| (502, "x".repeat(4 * 1024 * 1024))).await;
    let relay = common::start_relay(&upstream.base_url()).await;

    let (status, text) = call(&relay, Operation::GetStateInstance, "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope_error(&text), "HTTP error! Status: 502 Bad Gateway");
}

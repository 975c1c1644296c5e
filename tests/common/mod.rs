//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;

use green_api_relay::config::RelayConfig;
use green_api_relay::lifecycle::Shutdown;
use green_api_relay::upstream::UpstreamClient;
use green_api_relay::RelayServer;

/// One request as seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

type Responder = dyn Fn(&RecordedCall) -> (u16, String) + Send + Sync;

#[derive(Clone)]
struct MockState {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    respond: Arc<Responder>,
}

/// A programmable upstream that records every call it receives.
pub struct MockUpstream {
    pub addr: SocketAddr,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockUpstream {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

/// Start a mock upstream whose answer is computed by `respond`.
pub async fn start_mock_upstream<F>(respond: F) -> MockUpstream
where
    F: Fn(&RecordedCall) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let calls = Arc::new(Mutex::new(Vec::new()));

    let state = MockState {
        calls: calls.clone(),
        respond: Arc::new(respond),
    };
    let app = Router::new()
        .fallback(record_and_respond)
        .with_state(state)
        .layer(DefaultBodyLimit::disable());

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockUpstream { addr, calls }
}

/// Start a mock upstream that always answers with a fixed status and body.
pub async fn start_fixed_upstream(status: u16, body: &'static str) -> MockUpstream {
    start_mock_upstream(move |_| (status, body.to_string())).await
}

async fn record_and_respond(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let call = RecordedCall {
        method,
        path: uri.path().to_string(),
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        body,
    };

    let (status, body) = (state.respond)(&call);
    state.calls.lock().unwrap().push(call);

    (StatusCode::from_u16(status).unwrap(), body).into_response()
}

/// Base URL of a loopback port nobody listens on.
pub async fn closed_upstream_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// A relay running on an ephemeral port. Stops when dropped.
pub struct RunningRelay {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl RunningRelay {
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }
}

impl Drop for RunningRelay {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the relay pointed at `upstream_base`.
pub async fn start_relay(upstream_base: &str) -> RunningRelay {
    let mut config = RelayConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.listener.port = 0;
    config.upstream.base_url = upstream_base.to_string();

    let upstream = UpstreamClient::with_client(http_client(), upstream_base);
    let server = RelayServer::with_upstream(config, upstream);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    RunningRelay { addr, shutdown }
}

/// Non-pooled client that ignores proxy environment variables.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

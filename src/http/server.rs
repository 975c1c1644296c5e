//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with one route per operation
//! - Wire up middleware (request ID, tracing)
//! - Bind server to listener and serve until shutdown

use axum::{
    body::{Body, Bytes},
    extract::{DefaultBodyLimit, RawQuery, State},
    http::Request,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::RelayConfig;
use crate::http::handlers;
use crate::http::request::{MakeRequestUuidV4, X_REQUEST_ID};
use crate::lifecycle::shutdown;
use crate::routing::Operation;
use crate::upstream::{UpstreamClient, UpstreamResult};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
}

/// HTTP server for the relay.
pub struct RelayServer {
    router: Router,
    config: RelayConfig,
}

impl RelayServer {
    /// Create a server, building the shared upstream client from `config`.
    pub fn new(config: RelayConfig) -> UpstreamResult<Self> {
        let upstream = UpstreamClient::new(&config.upstream)?;
        Ok(Self::with_upstream(config, upstream))
    }

    /// Create a server around an already-built upstream client.
    pub fn with_upstream(config: RelayConfig, upstream: UpstreamClient) -> Self {
        let router = Self::build_router(AppState { upstream });
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let mut router = Router::new();

        for op in Operation::ALL {
            let handler = move |State(state): State<AppState>,
                                RawQuery(query): RawQuery,
                                body: Bytes| {
                handlers::relay(state, op, query, body)
            };
            let method_router = if op.accepts_body() {
                post(handler)
            } else {
                get(handler)
            };
            router = router.route(op.path(), method_router);
        }

        // Spans carry the path only: the query string holds the access token.
        let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get(&X_REQUEST_ID)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown");
            tracing::info_span!(
                "request",
                method = %request.method(),
                path = %request.uri().path(),
                request_id = %request_id,
            )
        });

        // Bodies are relayed whatever their size; only decoding can reject them.
        router.with_state(state).layer(DefaultBodyLimit::disable()).layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
                .layer(trace)
                .layer(PropagateRequestIdLayer::new(X_REQUEST_ID)),
        )
    }

    /// A clone of the router, for driving the relay without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown_rx` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "Starting server on port {}",
            addr.port()
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

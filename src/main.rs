//! Green API Relay
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌───────────────────────────────────────────────┐
//!                         │                  GREEN API RELAY              │
//!                         │                                               │
//!     Client Request      │  ┌─────────┐    ┌────────────┐    ┌────────┐  │
//!     ────────────────────┼─▶│  http   │───▶│  handlers  │───▶│upstream│──┼──▶ Green API
//!                         │  │ server  │    │ (dispatch) │    │ client │  │
//!                         │  └─────────┘    └─────┬──────┘    └───┬────┘  │
//!                         │                       │               │       │
//!     Client Response     │  ┌──────────┐         │               │       │
//!     ◀───────────────────┼──│ envelope │◀────────┴───────────────┘       │
//!                         │  └──────────┘                                 │
//!                         │                                               │
//!                         │  config · observability · lifecycle           │
//!                         └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use green_api_relay::config::load_config;
use green_api_relay::lifecycle::{signals, Shutdown};
use green_api_relay::observability::{logging, metrics};
use green_api_relay::RelayServer;

#[derive(Parser)]
#[command(name = "green-api-relay")]
#[command(about = "HTTP relay for the Green API messaging service", long_about = None)]
struct Args {
    /// Optional TOML configuration file. `PORT` overrides the listener port.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    logging::init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        upstream = %config.upstream.base_url,
        timeout_secs = ?config.upstream.timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Validation already checked the address.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown);

    let server = RelayServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

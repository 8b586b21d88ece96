//! Beacon Callback Receiver
//!
//! A proof-of-concept callback receiver built with Tokio and Axum for
//! authorized red-team exercises: implants beacon back with a plain HTTP GET
//! carrying `hostname` and `username` query parameters, and the receiver
//! prints each callback to the console.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────┐
//!                    │             BEACON RECEIVER               │
//!                    │                                           │
//!   GET /?hostname=… │  ┌──────────┐    ┌───────────────────┐   │
//!   ─────────────────┼─▶│  http    │───▶│     callback      │   │
//!                    │  │  server  │    │ field extraction  │   │
//!                    │  └──────────┘    └─────────┬─────────┘   │
//!                    │                            │              │
//!   200 empty body   │                            ▼              │
//!   ◀────────────────┼──                ┌───────────────────┐   │
//!                    │                  │   console sink    │   │
//!                    │                  │  (line-atomic)    │   │
//!                    │                  └───────────────────┘   │
//!                    │                                           │
//!                    │  ┌─────────────────────────────────────┐ │
//!                    │  │        Cross-Cutting Concerns        │ │
//!                    │  │  ┌────────┐  ┌─────────────────────┐ │ │
//!                    │  │  │ config │  │      lifecycle       │ │ │
//!                    │  │  │        │  │ signals → shutdown   │ │ │
//!                    │  │  └────────┘  └─────────────────────┘ │ │
//!                    │  └─────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use beacon_receiver::config::{self, ReceiverConfig};
use beacon_receiver::http::HttpServer;
use beacon_receiver::lifecycle::{signals, Shutdown};

#[derive(Parser)]
#[command(name = "beacon-receiver")]
#[command(about = "PoC beacon callback receiver", long_about = None)]
struct Cli {
    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beacon_receiver=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("beacon-receiver v0.1.0 starting");

    let cli = Cli::parse();
    let config = match cli.config {
        Some(path) => config::load_config(&path)?,
        None => ReceiverConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        color = config.console.color,
        drain_timeout_secs = config.shutdown.drain_timeout_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for callbacks"
    );

    // Translate the first SIGINT/SIGTERM into the shutdown token
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        if let Err(error) = signals::wait_for_termination().await {
            tracing::error!(%error, "Failed to wait for termination signal");
        }
        tracing::info!("Termination signal received, stopping receiver");
        shutdown.trigger();
    });

    // Create and run the server
    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

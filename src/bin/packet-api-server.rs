// Copyright (c) 2025 - Cowboy AI, Inc.
//! Packet API mock server
//!
//! Serves the in-memory store over HTTP until interrupted.
//!
//! Run with: cargo run --bin packet-api-server
//!
//! Configuration comes from the environment (see `packet_api_server::config`):
//! - `PACKET_API_LISTEN` - bind address (default 127.0.0.1:8080)
//! - `PACKET_API_METADATA_DEVICE` - device served by `/metadata`
//! - `PACKET_API_ISCSI_IQN`, `PACKET_API_ISCSI_PORTALS` - reported transport

use anyhow::{Context, Result};
use packet_api_server::api::{self, AppState};
use packet_api_server::ServerConfig;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    info!("Configuration loaded:");
    info!("  - Listen: {}", config.listen);
    match &config.metadata_device {
        Some(device) => info!("  - Metadata device: {}", device),
        None => warn!("  - Metadata device: none, /metadata will answer 404"),
    }
    info!("  - iSCSI target: {}", config.transport.iqn);

    let app = api::router(AppState::from_config(&config));

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen))?;
    info!("Listening on http://{}", config.listen);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

// File: crates/csvchart-server/src/main.rs
// Summary: Server binary; parses flags, installs logging, serves the router.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use csvchart_server::{build_router, telemetry, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    telemetry::init_tracing(config.verbose);

    let addr = config.socket_addr();
    let state = AppState::from_config(&config);
    info!(
        alignment = %state.alignment,
        theme = state.theme.name,
        upload_limit_mb = config.upload_limit_mb,
        "configuration loaded"
    );
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Starting server on port {}", addr.port());
    info!("Visit on http://{addr}");

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}

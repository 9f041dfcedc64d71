//! Triage Daemon - complaint intake service
//!
//! Analyzes incoming complaints, routes them to the responsible department,
//! and serves the intake HTTP API.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use triaged::config::DaemonConfig;
use triaged::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Triage Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let config = DaemonConfig::load();
    let state = AppState::new(config);

    server::run(state).await
}

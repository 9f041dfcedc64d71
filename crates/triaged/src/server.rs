//! HTTP server for triaged.

use crate::config::DaemonConfig;
use crate::routes;
use crate::store::ComplaintStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub store: Arc<RwLock<ComplaintStore>>,
    pub config: DaemonConfig,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: DaemonConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(ComplaintStore::new())),
            config,
            start_time: Instant::now(),
        }
    }
}

/// Run the HTTP server until shutdown.
pub async fn run(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr.clone();
    let state = Arc::new(state);

    let app = Router::new()
        .merge(routes::complaint_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

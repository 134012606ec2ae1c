//! Standalone web server for the portfolio backend.
//!
//! Long-running axum adapter over [`PortfolioService`]. The serverless
//! adapter in [`crate::function`] exposes the same contract one invocation
//! at a time; neither defines its own semantics.

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::services::PortfolioService;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PortfolioService>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            service: Arc::new(PortfolioService::new(settings)),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Router construction for the standalone server.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

/// Build the application router.
///
/// CORS is applied once as a permissive router-wide layer; individual
/// handlers never set their own CORS headers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(handlers::welcome))
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/resume", get(handlers::fetch_resume))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

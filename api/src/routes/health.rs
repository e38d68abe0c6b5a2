//! Health check endpoint.
//!
//! Provides a simple health check endpoint for load balancers and monitoring
//! systems.

use crate::state::AppState;
use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status (always "healthy" if reachable).
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Creates the health check routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
///
/// Reachability only; it does not probe the Loki backend.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "lokirelay-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

//! Health check routes
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | /health | GET | liveness + version |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// Health routes - public, no auth
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (ok | error)
    status: &'static str,
    /// Crate version
    version: &'static str,
    /// Runtime environment
    environment: String,
}

/// GET /health - liveness check
async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
    })
}

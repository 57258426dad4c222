//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health - Status with bundle check

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::state::ServerState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
    pub dist_available: bool,
}

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// `degraded` when the page bundle is missing; the probes still answer.
pub async fn full_health(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    let dist_available = state.dist_available();
    let status = if dist_available { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dist_available,
    })
}

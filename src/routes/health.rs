//! Health check endpoint for container orchestration.
//!
//! Liveness probe that returns 200 OK with the process uptime. Used by
//! container health checks and load balancers to verify the service is alive.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Whole seconds since process start
    pub uptime: u64,
}

/// Health check handler.
///
/// Uptime is recomputed on every call from the monotonic start instant, so
/// it never decreases over the process lifetime.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime: state.uptime_secs(),
    })
}

//! Health check handler.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    /// Number of activities in the registry.
    pub activities: usize,
    /// Registry requests served since startup.
    pub requests: u64,
}

/// GET /health
///
/// Degraded when the registry was seeded with no activities.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let activities = state.registry.len();
    let status = if activities == 0 {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime().as_secs(),
        activities,
        requests: state.request_count(),
    })
}

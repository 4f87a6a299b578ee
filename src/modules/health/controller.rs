use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: i64,
    pub timestamp: String,
}

#[derive(Serialize, ToSchema)]
pub struct BannerResponse {
    pub message: String,
    pub version: String,
    pub status: String,
    pub timestamp: String,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
#[instrument]
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs: (Utc::now() - state.started_at).num_seconds(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// API banner served at the root path
#[instrument]
pub async fn root_banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Memepad Launchpad API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

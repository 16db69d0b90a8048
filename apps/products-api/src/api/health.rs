//! Health check endpoints

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: String,
    mongodb: bool,
    response_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Create a health check router, mounted at the app root
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Liveness check, always healthy while the process runs
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Readiness check, verifies the MongoDB connection with probe timing
async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let probe = database::mongodb::check_health_detailed(&state.mongo_client).await;

    Json(ReadinessResponse {
        status: if probe.healthy { "ready" } else { "unhealthy" }.to_string(),
        mongodb: probe.healthy,
        response_time_ms: probe.response_time_ms,
        error: probe.message,
    })
}

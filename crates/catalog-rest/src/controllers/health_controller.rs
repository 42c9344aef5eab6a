//! Health check controller.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use catalog_repository::StoreTarget;
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Readiness check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessResponse {
    /// `ready` or `not_ready`.
    pub status: String,
    /// Primary store: `up` or `down`.
    pub primary: String,
    /// Replica store: `up` or `down`.
    pub replica: String,
    /// Cache: `up` or `down`. Reported only, never gates readiness.
    pub cache: String,
}

/// Creates the health router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/live", get(liveness_check))
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn up_down(up: bool) -> String {
    if up { "up" } else { "down" }.to_string()
}

/// Readiness check endpoint.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Both stores answer queries", body = ReadinessResponse),
        (status = 503, description = "A store is unreachable", body = ReadinessResponse)
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let primary_up = store_is_up(&state, StoreTarget::Primary).await;
    let replica_up = store_is_up(&state, StoreTarget::Replica).await;
    let ready = primary_up && replica_up;

    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = ReadinessResponse {
        status: if ready { "ready" } else { "not_ready" }.to_string(),
        primary: up_down(primary_up),
        replica: up_down(replica_up),
        cache: up_down(state.cache.is_ready()),
    };

    (status, Json(body))
}

async fn store_is_up(state: &AppState, target: StoreTarget) -> bool {
    match state.store_router.health_check(target).await {
        Ok(()) => true,
        Err(e) => {
            warn!("Readiness check: {} store is down: {}", target, e);
            false
        }
    }
}

/// Liveness check endpoint.
#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive")
    )
)]
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}

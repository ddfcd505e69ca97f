//! # Health Probe

use axum::http::StatusCode;
use axum::routing::any;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", any(health))
}

/// /health — Liveness probe. Always 200 with an empty body.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Process is running")),
    tag = "health"
)]
pub async fn health() -> StatusCode {
    StatusCode::OK
}

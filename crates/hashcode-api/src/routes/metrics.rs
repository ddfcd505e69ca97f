//! # Request Metrics
//!
//! `/metrics` returns the request counter snapshot as a JSON object of
//! counter name to value, e.g. `{"requests": 6}`.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::routing::any;
use axum::{Json, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/metrics", any(metrics))
}

/// /metrics — Current counter values.
#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "Counter name to current value", body = BTreeMap<String, u64>),
    ),
    tag = "metrics"
)]
pub async fn metrics(State(state): State<AppState>) -> Json<BTreeMap<String, u64>> {
    Json(state.counter.snapshot())
}

//! # hashcode-api — Axum Service for Token Issuance
//!
//! Given a request body, the service returns an HMAC of that body keyed by
//! the process secret, letting a caller prove the body was endorsed by a
//! holder of that secret. The service signs; it does not gate.
//!
//! ## API Surface
//!
//! | Path            | Module                | Response                       |
//! |-----------------|-----------------------|--------------------------------|
//! | `/token`        | [`routes::token`]     | `{"hashcode": "<hex>"}`        |
//! | `/health`       | [`routes::health`]    | `200`, empty body              |
//! | `/metrics`      | [`routes::metrics`]   | `{"requests": N}`              |
//! | `/openapi.json` | [`openapi`]           | OpenAPI document               |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → DefaultBodyLimit → Handler
//! ```

pub mod codec;
pub mod config;
pub mod counter;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .merge(routes::health::router())
        .merge(routes::token::router())
        .merge(routes::metrics::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

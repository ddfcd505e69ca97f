//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "hashcode — Token Issuance API",
        description = "Returns a keyed MAC of the request body for callers that need proof a body was endorsed by the service secret."
    ),
    paths(
        crate::routes::token::issue_token,
        crate::routes::health::health,
        crate::routes::metrics::metrics,
    ),
    components(schemas(
        crate::codec::TokenResponse,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "token", description = "Token issuance"),
        (name = "health", description = "Health probe"),
        (name = "metrics", description = "Request counters"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

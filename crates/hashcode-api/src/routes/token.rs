//! # Token Issuance
//!
//! `/token` signs the raw request body with the process secret and returns
//! `{"hashcode": "<hex>"}`. Issuance is unconditional: any caller may request
//! a token for any body.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;

use crate::codec;
use crate::error::AppError;
use crate::state::AppState;

/// Build the token router.
pub fn router() -> Router<AppState> {
    Router::new().route("/token", any(issue_token))
}

/// /token — Issue a token for the request body.
#[utoipa::path(
    post,
    path = "/token",
    request_body(
        content = String,
        content_type = "application/octet-stream",
        description = "Arbitrary message bytes to sign"
    ),
    responses(
        (status = 200, description = "MAC of the request body", body = crate::codec::TokenResponse),
        (status = 413, description = "Body exceeds the configured limit", body = crate::error::ErrorBody),
        (status = 500, description = "Response could not be encoded", body = crate::error::ErrorBody),
    ),
    tag = "token"
)]
pub async fn issue_token(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    let message = body?;
    state.counter.increment();

    let digest = hashcode_crypto::compute(&message, &state.config.secret);
    let payload = codec::encode(digest.as_bytes())?;
    tracing::debug!(message_len = message.len(), "issued token");

    Ok(([(header::CONTENT_TYPE, "application/json")], payload).into_response())
}

//! # Token Response Codec
//!
//! Wraps a MAC digest into the wire payload `{"hashcode": "<hex>"}`,
//! pretty-printed with two-space indentation. Output is deterministic: the
//! same digest always encodes to the same bytes.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// The token issuance response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Lowercase hex encoding of the MAC, two characters per digest byte.
    #[schema(example = "25af6174a0fcecc4d346680a72b7ce644b9a88e8")]
    pub hashcode: String,
}

/// The payload could not be serialized or parsed.
#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("token response serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize `digest` as a pretty-printed [`TokenResponse`].
pub fn encode(digest: &[u8]) -> Result<Vec<u8>, EncodingError> {
    let payload = TokenResponse {
        hashcode: hashcode_core::digest::to_hex(digest),
    };
    Ok(serde_json::to_vec_pretty(&payload)?)
}

/// Parse a [`TokenResponse`] produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<TokenResponse, EncodingError> {
    Ok(serde_json::from_slice(bytes)?)
}

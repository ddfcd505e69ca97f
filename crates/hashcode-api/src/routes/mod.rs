//! # API Route Modules
//!
//! - `token` — token issuance: HMAC of the request body.
//! - `health` — liveness probe.
//! - `metrics` — request counter snapshot.
//!
//! Every route accepts any HTTP method.

pub mod health;
pub mod metrics;
pub mod token;

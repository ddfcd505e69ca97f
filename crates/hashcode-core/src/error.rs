//! # Error Types
//!
//! Validation errors raised while constructing core values.

use thiserror::Error;

/// Errors from constructing core types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The shared secret is empty. An empty key trivially breaks the
    /// authentication property, so it is rejected outright.
    #[error("secret key must not be empty")]
    EmptySecret,

    /// The hash algorithm name is not one of the supported identifiers.
    #[error("unknown hash algorithm: {0} (expected \"sha1\" or \"sha256\")")]
    UnknownAlgorithm(String),
}

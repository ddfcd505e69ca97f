//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. Cloning is cheap: the secret sits behind an `Arc`
//! and the counter is a shared atomic handle.

use crate::config::AppConfig;
use crate::counter::RequestCounter;

#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable start-up configuration, including the signing secret.
    pub config: AppConfig,
    /// Issuance counter served by `/metrics`.
    pub counter: RequestCounter,
}

impl AppState {
    /// Build state from configuration, seeding the counter from
    /// `config.initial_requests`.
    pub fn new(config: AppConfig) -> Self {
        let counter = RequestCounter::new(config.initial_requests);
        Self::with_counter(config, counter)
    }

    /// Build state around an externally owned counter.
    pub fn with_counter(config: AppConfig, counter: RequestCounter) -> Self {
        Self { config, counter }
    }
}

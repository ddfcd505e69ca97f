//! # Request Counter
//!
//! Process-wide count of token issuance calls, served by `/metrics`.
//!
//! The counter is an owned handle injected through [`AppState`](crate::state::AppState)
//! rather than a global. Clones share the same underlying atomic, so every
//! handler sees the same value and concurrent increments are never lost.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Name under which the issuance count appears in the metrics snapshot.
pub const REQUESTS: &str = "requests";

/// Shared, monotonically non-decreasing request counter.
#[derive(Debug, Clone)]
pub struct RequestCounter {
    requests: Arc<AtomicU64>,
}

impl RequestCounter {
    /// Create a counter starting at `initial`.
    pub fn new(initial: u64) -> Self {
        Self {
            requests: Arc::new(AtomicU64::new(initial)),
        }
    }

    /// Record one issuance call.
    pub fn increment(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Return the current count.
    pub fn get(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    /// Named counters and their current values.
    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        BTreeMap::from([(REQUESTS.to_string(), self.get())])
    }
}

impl Default for RequestCounter {
    fn default() -> Self {
        Self::new(0)
    }
}

//! File-server Hit Counter
//!
//! Process-wide visit counter owned by the application state.

use std::sync::atomic::{AtomicI32, Ordering};

/// Atomic visit counter.
///
/// All operations go through a single `AtomicI32`, so concurrent increments
/// never lose updates and a reset is ordered against them.
#[derive(Debug, Default)]
pub struct HitCounter {
    hits: AtomicI32,
}

impl HitCounter {
    /// Create a counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one visit. Wraps on overflow.
    pub fn increment(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }

    /// Current number of visits
    pub fn get(&self) -> i32 {
        self.hits.load(Ordering::SeqCst)
    }

    /// Set the counter back to zero
    pub fn reset(&self) {
        self.hits.store(0, Ordering::SeqCst);
    }
}

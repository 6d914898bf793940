//! Controllable clock for exercising time-derived offer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::traits::TimeProvider;

/// Shared, settable clock. Clones observe the same instant, so a harness
/// can advance time while the code under test keeps its own handle.
#[derive(Debug, Clone)]
pub struct MockTime {
    now: Arc<AtomicU64>,
}

impl MockTime {
    pub fn new(initial: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(initial)),
        }
    }

    /// 2024-01-01 00:00:00 UTC, a convenient fixture epoch.
    pub fn default_time() -> Self {
        Self::new(1_704_067_200)
    }

    /// Jump to an absolute timestamp.
    pub fn set(&self, timestamp: u64) {
        self.now.store(timestamp, Ordering::SeqCst);
    }

    /// Move forward by the given number of seconds.
    pub fn advance(&self, seconds: u64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Default for MockTime {
    fn default() -> Self {
        Self::default_time()
    }
}

impl TimeProvider for MockTime {
    fn now_unix(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

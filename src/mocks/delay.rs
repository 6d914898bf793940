//! Zero-delay strategy for deterministic, fast tests.

use std::time::Duration;

use crate::store::OperationKind;
use crate::traits::DelayStrategy;

/// Delay strategy where every simulated latency and display window is zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroDelays;

impl ZeroDelays {
    pub const fn new() -> Self {
        Self
    }
}

impl DelayStrategy for ZeroDelays {
    fn search_debounce(&self) -> Duration {
        Duration::ZERO
    }

    fn sort_delay(&self) -> Duration {
        Duration::ZERO
    }

    fn load_more_delay(&self) -> Duration {
        Duration::ZERO
    }

    fn success_window(&self, _kind: OperationKind) -> Duration {
        Duration::ZERO
    }
}

/// Delay strategy with a single fixed duration everywhere, for tests that
/// need to observe the in-between states (sorting, banner up, etc.).
#[derive(Debug, Clone, Copy)]
pub struct FixedDelays(pub Duration);

impl DelayStrategy for FixedDelays {
    fn search_debounce(&self) -> Duration {
        self.0
    }

    fn sort_delay(&self) -> Duration {
        self.0
    }

    fn load_more_delay(&self) -> Duration {
        self.0
    }

    fn success_window(&self, _kind: OperationKind) -> Duration {
        self.0
    }
}

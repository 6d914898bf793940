//! Delay strategy abstraction for simulated latency and timed windows.
//!
//! The sort reveal, the "load more" spinner, the search debounce, and the
//! transient success banners are all paced by timers rather than real I/O.
//! Routing every duration through this trait lets tests run with zero
//! delays while production keeps the bounded-random UX pacing.

use std::ops::RangeInclusive;
use std::time::Duration;

use rand::Rng;

use crate::config;
use crate::store::OperationKind;

/// Trait for providing the durations behind every simulated delay.
pub trait DelayStrategy: Send + Sync {
    /// Debounce interval applied to search keystrokes.
    fn search_debounce(&self) -> Duration;

    /// Simulated latency before a new sort order is revealed.
    fn sort_delay(&self) -> Duration;

    /// Simulated latency before "load more" grows the visible page.
    fn load_more_delay(&self) -> Duration;

    /// How long a success banner of the given kind stays up before
    /// auto-dismissing.
    fn success_window(&self, kind: OperationKind) -> Duration;
}

/// Production implementation: fixed windows plus bounded-random latency
/// drawn from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDelays;

impl RandomDelays {
    pub const fn new() -> Self {
        Self
    }

    fn pick(range: RangeInclusive<u64>) -> Duration {
        Duration::from_millis(rand::thread_rng().gen_range(range))
    }
}

impl DelayStrategy for RandomDelays {
    fn search_debounce(&self) -> Duration {
        Duration::from_millis(config::SEARCH_DEBOUNCE_MS)
    }

    fn sort_delay(&self) -> Duration {
        Self::pick(config::SORT_DELAY_MS)
    }

    fn load_more_delay(&self) -> Duration {
        Self::pick(config::LOAD_MORE_DELAY_MS)
    }

    fn success_window(&self, kind: OperationKind) -> Duration {
        let ms = match kind {
            OperationKind::AcceptBid | OperationKind::RejectBid => {
                config::BID_SUCCESS_WINDOW_MS
            }
            OperationKind::StartAuction => config::START_AUCTION_SUCCESS_WINDOW_MS,
            OperationKind::ReAuction => config::RE_AUCTION_SUCCESS_WINDOW_MS,
            OperationKind::CancelAppointment => config::CANCEL_APPOINTMENT_SUCCESS_WINDOW_MS,
        };
        Duration::from_millis(ms)
    }
}

//! Multi-key sorting with a simulated reveal delay.
//!
//! Comparators are total orders over the displayed field. The delay is a
//! UX pacing device, not a real async boundary: while `sorting` is set
//! the page shows a placeholder, and the new key becomes visible in one
//! atomic swap once the delay elapses — intermediate orderings are never
//! observable.

use std::cmp::Ordering;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::normalize::OfferViewModel;
use crate::traits::DelayStrategy;

/// Direction-suffixed sort keys shared across the dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Soonest-ending first
    #[default]
    DateAsc,
    DateDesc,
    AmountAsc,
    AmountDesc,
    BidsAsc,
    BidsDesc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    fn compare(self, a: &OfferViewModel, b: &OfferViewModel) -> Ordering {
        match self {
            Self::DateAsc => a.time_remaining_secs.cmp(&b.time_remaining_secs),
            Self::DateDesc => b.time_remaining_secs.cmp(&a.time_remaining_secs),
            Self::AmountAsc => a.highest_bid.total_cmp(&b.highest_bid),
            Self::AmountDesc => b.highest_bid.total_cmp(&a.highest_bid),
            Self::BidsAsc => a.active_bid_count.cmp(&b.active_bid_count),
            Self::BidsDesc => b.active_bid_count.cmp(&a.active_bid_count),
            Self::NameAsc => a
                .vehicle_name
                .to_lowercase()
                .cmp(&b.vehicle_name.to_lowercase()),
            Self::NameDesc => b
                .vehicle_name
                .to_lowercase()
                .cmp(&a.vehicle_name.to_lowercase()),
        }
    }
}

/// Return a new ordering of the collection under the given key.
/// Stable: equal elements keep their incoming relative order.
pub fn sort_offers(key: SortKey, collection: &[OfferViewModel]) -> Vec<OfferViewModel> {
    let mut sorted = collection.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

#[derive(Debug, Default)]
struct SortState {
    key: SortKey,
    sorting: bool,
}

/// Per-page sort state with the simulated reveal delay.
#[derive(Clone)]
pub struct SortController {
    state: Arc<Mutex<SortState>>,
    delays: Arc<dyn DelayStrategy>,
}

impl SortController {
    pub fn new(delays: Arc<dyn DelayStrategy>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SortState::default())),
            delays,
        }
    }

    /// The key currently driving the displayed order.
    pub fn key(&self) -> SortKey {
        self.state.lock().key
    }

    /// Whether the placeholder should be shown instead of the list.
    pub fn is_sorting(&self) -> bool {
        self.state.lock().sorting
    }

    /// Request a new sort key.
    ///
    /// Re-selecting the current key is a no-op — no recompute, no delay.
    /// Otherwise the controller enters the `sorting` state for the
    /// simulated latency and then swaps the key atomically. Returns
    /// whether the key changed.
    pub async fn set_key(&self, key: SortKey) -> bool {
        {
            let mut state = self.state.lock();
            if state.key == key || state.sorting {
                return false;
            }
            state.sorting = true;
        }

        tokio::time::sleep(self.delays.sort_delay()).await;

        let mut state = self.state.lock();
        state.key = key;
        state.sorting = false;
        true
    }

    /// Order a collection under the current key.
    pub fn apply(&self, collection: &[OfferViewModel]) -> Vec<OfferViewModel> {
        sort_offers(self.key(), collection)
    }
}

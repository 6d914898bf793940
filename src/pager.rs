//! Incremental loader: a monotonically growing visible prefix.
//!
//! The data is already local; the load delay is simulated pacing. The
//! page resets to 1 whenever the underlying collection's *length*
//! changes (insert/remove, e.g. after a refetch). Re-sorting or
//! re-filtering a same-length collection does not reset — a deliberate
//! choice to preserve scroll position.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::traits::DelayStrategy;

#[derive(Debug)]
struct PagerState {
    page: usize,
    last_len: Option<usize>,
    loading: bool,
}

/// Per-page pagination state.
#[derive(Clone)]
pub struct Pager {
    state: Arc<Mutex<PagerState>>,
    page_size: usize,
    delays: Arc<dyn DelayStrategy>,
}

impl Pager {
    pub fn new(page_size: usize, delays: Arc<dyn DelayStrategy>) -> Self {
        Self {
            state: Arc::new(Mutex::new(PagerState {
                page: 1,
                last_len: None,
                loading: false,
            })),
            page_size,
            delays,
        }
    }

    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page(&self) -> usize {
        self.state.lock().page
    }

    /// Whether a load-more is currently in flight.
    pub fn is_loading_more(&self) -> bool {
        self.state.lock().loading
    }

    /// The visible prefix of the collection: `min(page * page_size, len)`.
    /// Observing a length change resets the page to 1 first.
    pub fn visible<T: Clone>(&self, collection: &[T]) -> Vec<T> {
        let page = self.sync(collection.len());
        let end = (page * self.page_size).min(collection.len());
        collection[..end].to_vec()
    }

    /// Whether more items exist beyond the visible prefix.
    pub fn has_more(&self, len: usize) -> bool {
        self.sync(len) * self.page_size < len
    }

    /// How many items remain beyond the visible prefix.
    pub fn remaining_count(&self, len: usize) -> usize {
        len.saturating_sub(self.sync(len) * self.page_size)
    }

    /// Grow the visible window by one page after the simulated delay.
    ///
    /// Only actionable when more items exist and no load is already in
    /// flight; returns whether the page grew. A length change during the
    /// delay resets pagination instead of growing it.
    pub async fn load_more(&self, len: usize) -> bool {
        {
            let mut state = self.state.lock();
            let effective = Self::synced_page(&mut state, len);
            if effective * self.page_size >= len || state.loading {
                return false;
            }
            state.loading = true;
        }

        tokio::time::sleep(self.delays.load_more_delay()).await;

        let mut state = self.state.lock();
        state.loading = false;
        if state.last_len == Some(len) {
            state.page += 1;
            true
        } else {
            false
        }
    }

    /// Reset the page when the collection length changed; returns the
    /// effective page.
    fn sync(&self, len: usize) -> usize {
        let mut state = self.state.lock();
        Self::synced_page(&mut state, len)
    }

    fn synced_page(state: &mut PagerState, len: usize) -> usize {
        if state.last_len != Some(len) {
            state.last_len = Some(len);
            state.page = 1;
        }
        state.page
    }
}

//! Per-page composed view: the surface the presentation layer consumes.
//!
//! An `OfferPage` chains the read pipeline from store snapshot through
//! normalize, search filter, sort, and visible prefix, and owns the
//! page-local ephemeral state (sort key, page count). Views never read
//! raw store slices directly.

use std::sync::Arc;

use crate::controllers::fetch::FetchController;
use crate::normalize::{normalize, OfferViewModel};
use crate::pager::Pager;
use crate::search::SearchEngine;
use crate::sort::{SortController, SortKey};
use crate::store::{Collection, DashboardStore};
use crate::traits::{DelayStrategy, MarketplaceApi, TimeProvider};

/// One render-ready view of a page, derived fresh from the store.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    /// The visible prefix after search, sort, and pagination.
    /// Empty while a sort reveal is pending so partial orderings are
    /// never observable.
    pub items: Vec<OfferViewModel>,
    pub loading: bool,
    pub error: Option<String>,
    pub sorting: bool,
    pub has_more: bool,
    pub remaining_count: usize,
    pub total_count: u64,
}

/// Composed data surface for one dashboard page.
///
/// The search engine is shared across all pages (one query text filters
/// every collection); sort key and page count are page-local.
#[derive(Clone)]
pub struct OfferPage {
    store: DashboardStore,
    collection: Collection,
    time: Arc<dyn TimeProvider>,
    fetcher: FetchController,
    search: SearchEngine,
    sort: SortController,
    pager: Pager,
}

impl OfferPage {
    pub fn new(
        store: DashboardStore,
        api: Arc<dyn MarketplaceApi>,
        collection: Collection,
        time: Arc<dyn TimeProvider>,
        search: SearchEngine,
        delays: Arc<dyn DelayStrategy>,
        page_size: usize,
    ) -> Self {
        Self {
            fetcher: FetchController::new(store.clone(), api, collection),
            store,
            collection,
            time,
            search,
            sort: SortController::new(delays.clone()),
            pager: Pager::new(page_size, delays),
        }
    }

    pub const fn collection(&self) -> Collection {
        self.collection
    }

    /// Fetch (or retry) this page's collection.
    pub async fn refresh(&self) {
        self.fetcher.refetch().await;
    }

    /// The filtered, sorted collection before pagination.
    async fn derived(&self) -> Vec<OfferViewModel> {
        let records = self.store.records(self.collection).await;
        let views = normalize(self.collection, &records, &*self.time);
        let filtered = self.search.apply(&views);
        self.sort.apply(&filtered)
    }

    /// Derive the current render-ready snapshot.
    pub async fn snapshot(&self) -> PageSnapshot {
        let slice = self.store.collection(self.collection).await;
        let sorting = self.sort.is_sorting();
        let derived = self.derived().await;
        let len = derived.len();

        let items = if sorting {
            Vec::new()
        } else {
            self.pager.visible(&derived)
        };

        PageSnapshot {
            items,
            loading: slice.loading,
            error: slice.error,
            sorting,
            has_more: self.pager.has_more(len),
            remaining_count: self.pager.remaining_count(len),
            total_count: slice.total_count,
        }
    }

    /// Grow the visible window by one page. Returns whether it grew.
    pub async fn load_more(&self) -> bool {
        let len = self.derived().await.len();
        self.pager.load_more(len).await
    }

    /// Change the sort key (same-key re-select is a no-op).
    pub async fn set_sort_key(&self, key: SortKey) -> bool {
        self.sort.set_key(key).await
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort.key()
    }

    /// Record a search keystroke (applied after the debounce interval).
    pub fn set_query(&self, text: &str) {
        self.search.set_query(text);
    }

    pub fn query(&self) -> String {
        self.search.query()
    }

    /// Clear the search immediately.
    pub fn clear_search(&self) {
        self.search.clear();
    }
}

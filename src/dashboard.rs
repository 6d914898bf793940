//! Bundled application surface handed to the presentation layer.

use std::sync::Arc;

use crate::config;
use crate::controllers::{
    AppointmentController, AppointmentsFetchController, AuctionController, BidLifecycleController,
};
use crate::page::OfferPage;
use crate::search::SearchEngine;
use crate::store::{Collection, DashboardStore};
use crate::traits::{DelayStrategy, MarketplaceApi, RandomDelays, SystemTimeProvider, TimeProvider};

/// Shared dashboard handle: the store, the lifecycle controllers, and the
/// factory for per-page composed views.
#[derive(Clone)]
pub struct Dashboard {
    store: DashboardStore,
    api: Arc<dyn MarketplaceApi>,
    time: Arc<dyn TimeProvider>,
    delays: Arc<dyn DelayStrategy>,
    // One query text filters every collection, so the engine is shared
    // across all pages built from this handle.
    search: SearchEngine,
    bids: BidLifecycleController,
    auctions: AuctionController,
    appointments: AppointmentController,
}

impl Dashboard {
    pub fn new(
        api: Arc<dyn MarketplaceApi>,
        time: Arc<dyn TimeProvider>,
        delays: Arc<dyn DelayStrategy>,
    ) -> Self {
        let store = DashboardStore::new();
        Self {
            bids: BidLifecycleController::new(store.clone(), api.clone(), delays.clone()),
            auctions: AuctionController::new(store.clone(), api.clone(), delays.clone()),
            appointments: AppointmentController::new(store.clone(), api.clone(), delays.clone()),
            search: SearchEngine::new(delays.clone()),
            store,
            api,
            time,
            delays,
        }
    }

    /// Production wiring: system clock and bounded-random delays.
    pub fn with_defaults(api: Arc<dyn MarketplaceApi>) -> Self {
        Self::new(
            api,
            Arc::new(SystemTimeProvider::new()),
            Arc::new(RandomDelays::new()),
        )
    }

    pub fn store(&self) -> &DashboardStore {
        &self.store
    }

    pub fn bids(&self) -> &BidLifecycleController {
        &self.bids
    }

    pub fn auctions(&self) -> &AuctionController {
        &self.auctions
    }

    pub fn appointments(&self) -> &AppointmentController {
        &self.appointments
    }

    /// Build the composed view for one dashboard page.
    pub fn page(&self, collection: Collection) -> OfferPage {
        self.page_with_size(collection, config::DEFAULT_PAGE_SIZE)
    }

    pub fn page_with_size(&self, collection: Collection, page_size: usize) -> OfferPage {
        OfferPage::new(
            self.store.clone(),
            self.api.clone(),
            collection,
            self.time.clone(),
            self.search.clone(),
            self.delays.clone(),
            page_size,
        )
    }

    /// The shared search engine behind every page's query surface.
    pub fn search(&self) -> &SearchEngine {
        &self.search
    }

    /// Fetch every collection concurrently. Each fetch writes only its
    /// own slice, so completion order does not matter.
    pub async fn refresh_all(&self) {
        let pages: Vec<_> = Collection::ALL
            .iter()
            .map(|&c| self.page(c))
            .collect();
        let appointments = AppointmentsFetchController::new(self.store.clone(), self.api.clone());

        tokio::join!(
            pages[0].refresh(),
            pages[1].refresh(),
            pages[2].refresh(),
            pages[3].refresh(),
            appointments.refetch(),
        );
    }
}

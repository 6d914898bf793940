//! Fetch controllers: one three-state machine per store slice.
//!
//! `idle → loading → {success, error}`. Success replaces the slice
//! wholesale; error leaves it untouched and stores a user-facing message.
//! Errors never propagate past the controller — the page layer reads them
//! from the store and offers a retry that calls `refetch()` again.

use std::sync::Arc;

use tracing::{info, warn};

use crate::store::{Collection, DashboardStore};
use crate::traits::MarketplaceApi;

/// Default message when the server gives no detail.
const DEFAULT_FETCH_ERROR: &str = "Unable to load data. Please try again.";

/// Fetches one offer collection into its store slice.
#[derive(Clone)]
pub struct FetchController {
    store: DashboardStore,
    api: Arc<dyn MarketplaceApi>,
    collection: Collection,
}

impl FetchController {
    pub fn new(store: DashboardStore, api: Arc<dyn MarketplaceApi>, collection: Collection) -> Self {
        Self {
            store,
            api,
            collection,
        }
    }

    pub const fn collection(&self) -> Collection {
        self.collection
    }

    /// Run one fetch cycle. Concurrent calls supersede each other via the
    /// store's fetch tickets; a stale completion is dropped, not merged.
    pub async fn refetch(&self) {
        let ticket = self.store.begin_fetch(self.collection).await;

        match self.api.fetch_offers(self.collection).await {
            Ok(resp) if resp.success => {
                info!(
                    collection = self.collection.label(),
                    count = resp.offers.len(),
                    "Fetched collection"
                );
                self.store
                    .apply_fetch(
                        self.collection,
                        ticket,
                        resp.offers,
                        resp.total_count,
                        resp.has_offers,
                    )
                    .await;
            }
            Ok(resp) => {
                let message = resp.message.unwrap_or_else(|| DEFAULT_FETCH_ERROR.into());
                warn!(
                    collection = self.collection.label(),
                    %message,
                    "Fetch rejected by server"
                );
                self.store.fail_fetch(self.collection, ticket, message).await;
            }
            Err(e) => {
                warn!(collection = self.collection.label(), error = %e, "Fetch failed");
                self.store
                    .fail_fetch(self.collection, ticket, DEFAULT_FETCH_ERROR.into())
                    .await;
            }
        }
    }
}

/// Fetches the appointments slice; same three-state shape.
#[derive(Clone)]
pub struct AppointmentsFetchController {
    store: DashboardStore,
    api: Arc<dyn MarketplaceApi>,
}

impl AppointmentsFetchController {
    pub fn new(store: DashboardStore, api: Arc<dyn MarketplaceApi>) -> Self {
        Self { store, api }
    }

    pub async fn refetch(&self) {
        let ticket = self.store.begin_appointments_fetch().await;

        match self.api.fetch_appointments().await {
            Ok(resp) if resp.success => {
                self.store
                    .apply_appointments_fetch(ticket, resp.appointments)
                    .await;
            }
            Ok(resp) => {
                let message = resp.message.unwrap_or_else(|| DEFAULT_FETCH_ERROR.into());
                self.store.fail_appointments_fetch(ticket, message).await;
            }
            Err(e) => {
                warn!(error = %e, "Appointments fetch failed");
                self.store
                    .fail_appointments_fetch(ticket, DEFAULT_FETCH_ERROR.into())
                    .await;
            }
        }
    }
}

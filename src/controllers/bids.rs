//! Bid lifecycle controller: accept/reject orchestration.
//!
//! `Idle → Pending → {Succeeded, Failed}`. On success the owning
//! collection is refetched so server-authoritative state (other bids
//! implicitly rejected, vehicle moved between collections) is reflected,
//! then the confirmation UI auto-closes after a bounded window and the
//! status returns to idle. Failures persist until explicitly dismissed.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::controllers::fetch::FetchController;
use crate::error::{DashResult, DashboardError};
use crate::records::BidActionRequest;
use crate::store::{Collection, DashboardStore, OperationKind};
use crate::traits::{DelayStrategy, MarketplaceApi};

/// Cancellable auto-dismiss timers, one slot per operation kind.
/// Re-invoking a kind cancels its previous banner timer.
pub(crate) type DismissTimers = Arc<Mutex<HashMap<OperationKind, CancellationToken>>>;

/// Replace the timer for a kind, cancelling any previous one.
pub(crate) fn arm_timer(timers: &DismissTimers, kind: OperationKind) -> CancellationToken {
    let token = CancellationToken::new();
    if let Some(old) = timers.lock().insert(kind, token.clone()) {
        old.cancel();
    }
    token
}

/// Schedule the success auto-dismiss for a kind on its fresh token.
pub(crate) fn schedule_dismiss(
    store: DashboardStore,
    timers: &DismissTimers,
    kind: OperationKind,
    delays: &Arc<dyn DelayStrategy>,
) {
    let token = arm_timer(timers, kind);
    let window = delays.success_window(kind);
    tokio::spawn(async move {
        tokio::select! {
            _ = token.cancelled() => {}
            _ = tokio::time::sleep(window) => {
                store.expire_success(kind).await;
            }
        }
    });
}

/// Orchestrates accept/reject mutations for bids.
#[derive(Clone)]
pub struct BidLifecycleController {
    store: DashboardStore,
    api: Arc<dyn MarketplaceApi>,
    delays: Arc<dyn DelayStrategy>,
    timers: DismissTimers,
}

impl BidLifecycleController {
    pub fn new(
        store: DashboardStore,
        api: Arc<dyn MarketplaceApi>,
        delays: Arc<dyn DelayStrategy>,
    ) -> Self {
        Self {
            store,
            api,
            delays,
            timers: DismissTimers::default(),
        }
    }

    /// Accept a bid on a vehicle in the given collection.
    pub async fn accept(
        &self,
        collection: Collection,
        request: BidActionRequest,
    ) -> DashResult<()> {
        self.run(OperationKind::AcceptBid, collection, request).await
    }

    /// Reject a bid on a vehicle in the given collection.
    pub async fn reject(
        &self,
        collection: Collection,
        request: BidActionRequest,
    ) -> DashResult<()> {
        self.run(OperationKind::RejectBid, collection, request).await
    }

    /// Explicitly clear a persistent failure (or a lingering banner).
    pub async fn dismiss(&self, kind: OperationKind) {
        if let Some(token) = self.timers.lock().remove(&kind) {
            token.cancel();
        }
        self.store.reset_operation(kind).await;
    }

    async fn run(
        &self,
        kind: OperationKind,
        collection: Collection,
        request: BidActionRequest,
    ) -> DashResult<()> {
        // Local eligibility check before anything hits the network.
        let bid = self
            .store
            .find_bid(collection, &request.product_id, &request.bid_id)
            .await
            .ok_or_else(|| {
                DashboardError::NotFound(format!("Bid {} not found", request.bid_id))
            })?;
        if !bid.is_actionable() {
            return Err(DashboardError::Validation(
                "This bid has already been decided or has expired".into(),
            ));
        }

        self.store.begin_operation(kind).await?;
        info!(kind = kind.label(), bid_id = %request.bid_id, "Bid mutation started");

        let result = match kind {
            OperationKind::AcceptBid => self.api.accept_bid(&request).await,
            _ => self.api.reject_bid(&request).await,
        };

        match result {
            Ok(resp) if resp.success => {
                self.store.succeed_operation(kind).await;
                // Server state is authoritative after an accept/reject;
                // pull the owning collection before the banner window runs.
                FetchController::new(self.store.clone(), self.api.clone(), collection)
                    .refetch()
                    .await;
                schedule_dismiss(self.store.clone(), &self.timers, kind, &self.delays);
                Ok(())
            }
            Ok(resp) => {
                let message = resp
                    .message
                    .unwrap_or_else(|| format!("{} failed", kind.label()));
                warn!(kind = kind.label(), %message, "Bid mutation rejected");
                self.store.fail_operation(kind, message).await;
                Ok(())
            }
            Err(e) => {
                warn!(kind = kind.label(), error = %e, "Bid mutation failed");
                self.store
                    .fail_operation(kind, "Something went wrong. Please try again.")
                    .await;
                Ok(())
            }
        }
    }
}

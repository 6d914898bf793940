//! Auction lifecycle controllers: start-auction and re-auction (relist).
//!
//! Same `Idle → Pending → {Succeeded, Failed}` shape as the bid
//! controller, with kind-specific payloads and side effects. Re-auction
//! failures arrive categorized from the server and each category maps to
//! its own user-facing message template.

use std::sync::Arc;

use tracing::{info, warn};

use crate::controllers::bids::{schedule_dismiss, DismissTimers};
use crate::controllers::fetch::FetchController;
use crate::error::DashResult;
use crate::records::MutationResponse;
use crate::store::{Collection, DashboardStore, OperationKind};
use crate::traits::{DelayStrategy, MarketplaceApi};

/// Message templates for categorized re-auction failures.
fn re_auction_failure_message(resp: &MutationResponse) -> String {
    match resp.error.as_ref() {
        Some(err) => match err.kind.as_str() {
            "DAYS_REMAINING" => {
                let days = err.days_remaining.unwrap_or(0);
                format!("This vehicle can be re-auctioned in {days} more days.")
            }
            "UNAUTHORIZED" => "You are not authorized to re-auction this vehicle.".into(),
            "NOT_FOUND" => "Vehicle not found.".into(),
            "NO_CASH_OFFER" => {
                "This vehicle has no cash offer and cannot be re-auctioned.".into()
            }
            _ => resp
                .message
                .clone()
                .unwrap_or_else(|| "Re-auction failed.".into()),
        },
        None => resp
            .message
            .clone()
            .unwrap_or_else(|| "Re-auction failed.".into()),
    }
}

/// Orchestrates start-auction and re-auction mutations.
#[derive(Clone)]
pub struct AuctionController {
    store: DashboardStore,
    api: Arc<dyn MarketplaceApi>,
    delays: Arc<dyn DelayStrategy>,
    timers: DismissTimers,
}

impl AuctionController {
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

    /// Put a vehicle up for live auction. On success the page layer
    /// navigates to the summary view once the success window elapses.
    pub async fn start_auction(&self, product_id: &str) -> DashResult<()> {
        let kind = OperationKind::StartAuction;
        self.store.begin_operation(kind).await?;
        info!(product_id, "Start-auction requested");

        match self.api.start_auction(product_id).await {
            Ok(resp) if resp.success => {
                self.store.succeed_operation(kind).await;
                schedule_dismiss(self.store.clone(), &self.timers, kind, &self.delays);
            }
            Ok(resp) => {
                let message = resp
                    .message
                    .unwrap_or_else(|| "This vehicle is not eligible for auction yet.".into());
                warn!(product_id, %message, "Start-auction rejected");
                self.store.fail_operation(kind, message).await;
            }
            Err(e) => {
                warn!(product_id, error = %e, "Start-auction failed");
                self.store
                    .fail_operation(kind, "Something went wrong. Please try again.")
                    .await;
            }
        }
        Ok(())
    }

    /// Relist an expired vehicle. On success the previous-offers
    /// collection is refetched and a longer success banner is shown.
    pub async fn re_auction(&self, product_id: &str) -> DashResult<()> {
        let kind = OperationKind::ReAuction;
        self.store.begin_operation(kind).await?;
        info!(product_id, "Re-auction requested");

        match self.api.re_auction(product_id).await {
            Ok(resp) if resp.success => {
                self.store.succeed_operation(kind).await;
                FetchController::new(self.store.clone(), self.api.clone(), Collection::Previous)
                    .refetch()
                    .await;
                schedule_dismiss(self.store.clone(), &self.timers, kind, &self.delays);
            }
            Ok(resp) => {
                let message = re_auction_failure_message(&resp);
                warn!(product_id, %message, "Re-auction rejected");
                self.store.fail_operation(kind, message).await;
            }
            Err(e) => {
                warn!(product_id, error = %e, "Re-auction failed");
                self.store
                    .fail_operation(kind, "Something went wrong. Please try again.")
                    .await;
            }
        }
        Ok(())
    }

    /// Explicitly clear a persistent failure for either kind.
    pub async fn dismiss(&self, kind: OperationKind) {
        if let Some(token) = self.timers.lock().remove(&kind) {
            token.cancel();
        }
        self.store.reset_operation(kind).await;
    }
}

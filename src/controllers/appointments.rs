//! Appointment lifecycle controller: cancellation with a mandatory reason.

use std::sync::Arc;

use tracing::{info, warn};

use crate::controllers::bids::{schedule_dismiss, DismissTimers};
use crate::controllers::fetch::AppointmentsFetchController;
use crate::error::{DashResult, DashboardError};
use crate::records::CancelAppointmentRequest;
use crate::store::{DashboardStore, OperationKind};
use crate::traits::{DelayStrategy, MarketplaceApi};

/// Orchestrates appointment cancellation.
#[derive(Clone)]
pub struct AppointmentController {
    store: DashboardStore,
    api: Arc<dyn MarketplaceApi>,
    delays: Arc<dyn DelayStrategy>,
    timers: DismissTimers,
}

impl AppointmentController {
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

    /// Cancel an appointment. The reason is mandatory: an empty or
    /// whitespace-only reason is rejected locally before any network call.
    pub async fn cancel(&self, appointment_id: &str, reason: &str) -> DashResult<()> {
        if reason.trim().is_empty() {
            return Err(DashboardError::Validation(
                "A cancellation reason is required".into(),
            ));
        }

        let kind = OperationKind::CancelAppointment;
        self.store.begin_operation(kind).await?;
        info!(appointment_id, "Appointment cancellation requested");

        let request = CancelAppointmentRequest {
            appointment_id: appointment_id.into(),
            notes: reason.trim().into(),
        };
        match self.api.cancel_appointment(&request).await {
            Ok(resp) if resp.success => {
                self.store.succeed_operation(kind).await;
                AppointmentsFetchController::new(self.store.clone(), self.api.clone())
                    .refetch()
                    .await;
                schedule_dismiss(self.store.clone(), &self.timers, kind, &self.delays);
            }
            Ok(resp) => {
                let message = resp
                    .message
                    .unwrap_or_else(|| "Unable to cancel this appointment.".into());
                warn!(appointment_id, %message, "Cancellation rejected");
                self.store.fail_operation(kind, message).await;
            }
            Err(e) => {
                warn!(appointment_id, error = %e, "Cancellation failed");
                self.store
                    .fail_operation(kind, "Something went wrong. Please try again.")
                    .await;
            }
        }
        Ok(())
    }

    /// Explicitly clear a persistent failure.
    pub async fn dismiss(&self) {
        let kind = OperationKind::CancelAppointment;
        if let Some(token) = self.timers.lock().remove(&kind) {
            token.cancel();
        }
        self.store.reset_operation(kind).await;
    }
}

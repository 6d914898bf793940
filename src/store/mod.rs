//! Single source of truth for the dashboard.
//!
//! The store holds the four offer collections plus appointments and the
//! per-operation-kind status triples. Every write path owns exactly one
//! slice: fetch controllers replace their collection wholesale, lifecycle
//! controllers touch only their operation status. Read paths (normalize,
//! search, sort, pagination) are purely derivational and never write back.

pub mod operation;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{DashResult, DashboardError};
use crate::records::{RawAppointment, RawBid, RawVehicleRecord};

pub use operation::{OperationKind, OperationStatus};

/// The four named offer collections on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Pending,
    Previous,
    Accepted,
    Live,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Pending,
        Collection::Previous,
        Collection::Accepted,
        Collection::Live,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending-offers",
            Self::Previous => "previous-offers",
            Self::Accepted => "accepted-offers",
            Self::Live => "live-auctions",
        }
    }
}

/// One named slice of the store: the raw records plus fetch flags.
///
/// `ticket`/`applied` are monotonically increasing fetch epochs. A refetch
/// started while another is in flight supersedes it: a completion whose
/// ticket is older than the last applied one is dropped, never merged.
#[derive(Debug, Clone, Default)]
pub struct CollectionSlice {
    pub records: Vec<RawVehicleRecord>,
    pub total_count: u64,
    pub has_items: bool,
    pub loading: bool,
    pub error: Option<String>,
    latest_ticket: u64,
    applied_ticket: u64,
}

/// Appointments slice, same fetch-flag shape as the offer slices.
#[derive(Debug, Clone, Default)]
pub struct AppointmentsSlice {
    pub records: Vec<RawAppointment>,
    pub loading: bool,
    pub error: Option<String>,
    latest_ticket: u64,
    applied_ticket: u64,
}

#[derive(Debug, Default)]
struct StoreInner {
    pending: CollectionSlice,
    previous: CollectionSlice,
    accepted: CollectionSlice,
    live: CollectionSlice,
    appointments: AppointmentsSlice,
    operations: HashMap<OperationKind, OperationStatus>,
}

impl StoreInner {
    fn slice(&self, collection: Collection) -> &CollectionSlice {
        match collection {
            Collection::Pending => &self.pending,
            Collection::Previous => &self.previous,
            Collection::Accepted => &self.accepted,
            Collection::Live => &self.live,
        }
    }

    fn slice_mut(&mut self, collection: Collection) -> &mut CollectionSlice {
        match collection {
            Collection::Pending => &mut self.pending,
            Collection::Previous => &mut self.previous,
            Collection::Accepted => &mut self.accepted,
            Collection::Live => &mut self.live,
        }
    }
}

/// Cloneable handle to the shared dashboard state.
#[derive(Clone, Default)]
pub struct DashboardStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    // --- offer collection fetch lifecycle ---

    /// Enter the loading state for a collection and take a fetch ticket.
    /// Entering loading clears any prior error.
    pub async fn begin_fetch(&self, collection: Collection) -> u64 {
        let mut inner = self.inner.write().await;
        let slice = inner.slice_mut(collection);
        slice.loading = true;
        slice.error = None;
        slice.latest_ticket += 1;
        slice.latest_ticket
    }

    /// Replace a collection wholesale from a successful fetch.
    ///
    /// A completion that has been superseded by a newer applied fetch is
    /// dropped. Returns whether the records were applied.
    pub async fn apply_fetch(
        &self,
        collection: Collection,
        ticket: u64,
        records: Vec<RawVehicleRecord>,
        total_count: Option<u64>,
        has_items: Option<bool>,
    ) -> bool {
        let mut inner = self.inner.write().await;
        let slice = inner.slice_mut(collection);

        if ticket <= slice.applied_ticket {
            warn!(
                collection = collection.label(),
                ticket, "Dropping stale fetch completion"
            );
            return false;
        }

        slice.total_count = total_count.unwrap_or(records.len() as u64);
        slice.has_items = has_items.unwrap_or(!records.is_empty());
        slice.records = records;
        slice.applied_ticket = ticket;
        if ticket == slice.latest_ticket {
            slice.loading = false;
        }
        debug!(
            collection = collection.label(),
            count = slice.records.len(),
            "Applied fetch"
        );
        true
    }

    /// Record a failed fetch. The collection's records are left untouched;
    /// only the latest in-flight fetch may surface its error.
    pub async fn fail_fetch(&self, collection: Collection, ticket: u64, message: String) {
        let mut inner = self.inner.write().await;
        let slice = inner.slice_mut(collection);

        if ticket != slice.latest_ticket {
            debug!(
                collection = collection.label(),
                ticket, "Dropping stale fetch error"
            );
            return;
        }
        slice.loading = false;
        slice.error = Some(message);
    }

    /// Snapshot a collection slice (records cloned).
    pub async fn collection(&self, collection: Collection) -> CollectionSlice {
        self.inner.read().await.slice(collection).clone()
    }

    /// Clone just the raw records of a collection.
    pub async fn records(&self, collection: Collection) -> Vec<RawVehicleRecord> {
        self.inner.read().await.slice(collection).records.clone()
    }

    /// Look up a bid inside a collection by vehicle and bid id.
    pub async fn find_bid(
        &self,
        collection: Collection,
        product_id: &str,
        bid_id: &str,
    ) -> Option<RawBid> {
        let inner = self.inner.read().await;
        inner
            .slice(collection)
            .records
            .iter()
            .find(|r| r.product_id == product_id)
            .and_then(|r| r.find_bid(bid_id))
            .cloned()
    }

    // --- appointments fetch lifecycle ---

    pub async fn begin_appointments_fetch(&self) -> u64 {
        let mut inner = self.inner.write().await;
        inner.appointments.loading = true;
        inner.appointments.error = None;
        inner.appointments.latest_ticket += 1;
        inner.appointments.latest_ticket
    }

    pub async fn apply_appointments_fetch(
        &self,
        ticket: u64,
        records: Vec<RawAppointment>,
    ) -> bool {
        let mut inner = self.inner.write().await;
        let slice = &mut inner.appointments;

        if ticket <= slice.applied_ticket {
            warn!(ticket, "Dropping stale appointments fetch completion");
            return false;
        }
        slice.records = records;
        slice.applied_ticket = ticket;
        if ticket == slice.latest_ticket {
            slice.loading = false;
        }
        true
    }

    pub async fn fail_appointments_fetch(&self, ticket: u64, message: String) {
        let mut inner = self.inner.write().await;
        let slice = &mut inner.appointments;

        if ticket != slice.latest_ticket {
            return;
        }
        slice.loading = false;
        slice.error = Some(message);
    }

    pub async fn appointments(&self) -> AppointmentsSlice {
        self.inner.read().await.appointments.clone()
    }

    // --- operation status ---

    /// Enter the pending state for an operation kind.
    ///
    /// Enforces at-most-one-in-flight per kind: a second invocation while
    /// pending is rejected with `InvalidState`.
    pub async fn begin_operation(&self, kind: OperationKind) -> DashResult<()> {
        let mut inner = self.inner.write().await;
        let status = inner.operations.entry(kind).or_default();

        if status.pending {
            return Err(DashboardError::InvalidState(format!(
                "{} is already in flight",
                kind.label()
            )));
        }
        status.begin();
        Ok(())
    }

    pub async fn succeed_operation(&self, kind: OperationKind) {
        let mut inner = self.inner.write().await;
        inner.operations.entry(kind).or_default().succeed();
    }

    pub async fn fail_operation(&self, kind: OperationKind, message: impl Into<String>) {
        let mut inner = self.inner.write().await;
        inner.operations.entry(kind).or_default().fail(message);
    }

    /// Clear the outcome of an operation (banner auto-dismiss or explicit
    /// error dismissal). Never clears an in-flight operation.
    pub async fn reset_operation(&self, kind: OperationKind) {
        let mut inner = self.inner.write().await;
        let status = inner.operations.entry(kind).or_default();
        if !status.pending {
            status.reset();
        }
    }

    /// Clear only the success flag, leaving a newly started same-kind
    /// operation untouched. Used by the auto-dismiss timer.
    pub async fn expire_success(&self, kind: OperationKind) {
        let mut inner = self.inner.write().await;
        let status = inner.operations.entry(kind).or_default();
        if !status.pending {
            status.success = false;
        }
    }

    pub async fn operation(&self, kind: OperationKind) -> OperationStatus {
        self.inner
            .read()
            .await
            .operations
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }
}

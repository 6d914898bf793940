//! Scripted mock backend for exercising the dashboard core in tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{DashResult, DashboardError};
use crate::records::{
    AppointmentsResponse, BidActionRequest, CancelAppointmentRequest, MutationResponse,
    OffersResponse, RawAppointment, RawVehicleRecord,
};
use crate::store::{Collection, OperationKind};
use crate::traits::MarketplaceApi;

#[derive(Default)]
struct MockApiInner {
    collections: HashMap<Collection, Vec<RawVehicleRecord>>,
    appointments: Vec<RawAppointment>,
    fetch_failures: HashMap<Collection, VecDeque<String>>,
    network_failures: HashMap<Collection, VecDeque<String>>,
    mutation_results: HashMap<OperationKind, VecDeque<MutationResponse>>,
    fetch_counts: HashMap<Collection, usize>,
    appointments_fetch_count: usize,
    mutation_counts: HashMap<OperationKind, usize>,
    last_bid_action: Option<BidActionRequest>,
    last_cancel_request: Option<CancelAppointmentRequest>,
}

/// Mock `MarketplaceApi` with seeded collections, scripted mutation
/// results, and call counters.
#[derive(Clone, Default)]
pub struct MockApi {
    inner: Arc<Mutex<MockApiInner>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the records returned for a collection.
    pub fn set_offers(&self, collection: Collection, records: Vec<RawVehicleRecord>) {
        self.inner.lock().collections.insert(collection, records);
    }

    /// Seed the appointments collection.
    pub fn set_appointments(&self, records: Vec<RawAppointment>) {
        self.inner.lock().appointments = records;
    }

    /// Make the next fetch of a collection return `success: false` with
    /// the given server message.
    pub fn fail_next_fetch(&self, collection: Collection, message: impl Into<String>) {
        self.inner
            .lock()
            .fetch_failures
            .entry(collection)
            .or_default()
            .push_back(message.into());
    }

    /// Make the next fetch of a collection fail at the transport level.
    pub fn fail_next_fetch_network(&self, collection: Collection, message: impl Into<String>) {
        self.inner
            .lock()
            .network_failures
            .entry(collection)
            .or_default()
            .push_back(message.into());
    }

    /// Queue the response for the next mutation of the given kind.
    /// Unscripted mutations succeed.
    pub fn push_mutation_result(&self, kind: OperationKind, response: MutationResponse) {
        self.inner
            .lock()
            .mutation_results
            .entry(kind)
            .or_default()
            .push_back(response);
    }

    pub fn fetch_count(&self, collection: Collection) -> usize {
        self.inner
            .lock()
            .fetch_counts
            .get(&collection)
            .copied()
            .unwrap_or(0)
    }

    pub fn appointments_fetch_count(&self) -> usize {
        self.inner.lock().appointments_fetch_count
    }

    pub fn mutation_count(&self, kind: OperationKind) -> usize {
        self.inner
            .lock()
            .mutation_counts
            .get(&kind)
            .copied()
            .unwrap_or(0)
    }

    pub fn last_bid_action(&self) -> Option<BidActionRequest> {
        self.inner.lock().last_bid_action.clone()
    }

    pub fn last_cancel_request(&self) -> Option<CancelAppointmentRequest> {
        self.inner.lock().last_cancel_request.clone()
    }

    fn mutate(&self, kind: OperationKind) -> MutationResponse {
        let mut inner = self.inner.lock();
        *inner.mutation_counts.entry(kind).or_default() += 1;
        inner
            .mutation_results
            .get_mut(&kind)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(MutationResponse::ok)
    }
}

#[async_trait]
impl MarketplaceApi for MockApi {
    async fn fetch_offers(&self, collection: Collection) -> DashResult<OffersResponse> {
        let mut inner = self.inner.lock();
        *inner.fetch_counts.entry(collection).or_default() += 1;

        if let Some(msg) = inner
            .network_failures
            .get_mut(&collection)
            .and_then(VecDeque::pop_front)
        {
            return Err(DashboardError::Network(msg));
        }
        if let Some(msg) = inner
            .fetch_failures
            .get_mut(&collection)
            .and_then(VecDeque::pop_front)
        {
            return Ok(OffersResponse {
                success: false,
                offers: vec![],
                total_count: None,
                has_offers: None,
                message: Some(msg),
            });
        }

        let offers = inner.collections.get(&collection).cloned().unwrap_or_default();
        Ok(OffersResponse {
            success: true,
            total_count: Some(offers.len() as u64),
            has_offers: Some(!offers.is_empty()),
            offers,
            message: None,
        })
    }

    async fn fetch_appointments(&self) -> DashResult<AppointmentsResponse> {
        let mut inner = self.inner.lock();
        inner.appointments_fetch_count += 1;
        Ok(AppointmentsResponse {
            success: true,
            appointments: inner.appointments.clone(),
            message: None,
        })
    }

    async fn accept_bid(&self, request: &BidActionRequest) -> DashResult<MutationResponse> {
        self.inner.lock().last_bid_action = Some(request.clone());
        Ok(self.mutate(OperationKind::AcceptBid))
    }

    async fn reject_bid(&self, request: &BidActionRequest) -> DashResult<MutationResponse> {
        self.inner.lock().last_bid_action = Some(request.clone());
        Ok(self.mutate(OperationKind::RejectBid))
    }

    async fn start_auction(&self, _product_id: &str) -> DashResult<MutationResponse> {
        Ok(self.mutate(OperationKind::StartAuction))
    }

    async fn re_auction(&self, _product_id: &str) -> DashResult<MutationResponse> {
        Ok(self.mutate(OperationKind::ReAuction))
    }

    async fn cancel_appointment(
        &self,
        request: &CancelAppointmentRequest,
    ) -> DashResult<MutationResponse> {
        self.inner.lock().last_cancel_request = Some(request.clone());
        Ok(self.mutate(OperationKind::CancelAppointment))
    }
}

//! Network API abstraction for the marketplace backend.
//!
//! The dashboard core never talks to the network directly; it goes
//! through this trait so the whole layer can be exercised against a
//! scripted mock in tests.

use async_trait::async_trait;

use crate::error::DashResult;
use crate::records::{
    AppointmentsResponse, BidActionRequest, CancelAppointmentRequest, MutationResponse,
    OffersResponse,
};
use crate::store::Collection;

/// The collaborator-owned network surface this layer depends on.
///
/// A transport-level failure is an `Err`; an application-level rejection
/// arrives as `Ok` with `success: false` and is mapped by the controllers.
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    /// `GET` one of the four offer collections.
    async fn fetch_offers(&self, collection: Collection) -> DashResult<OffersResponse>;

    /// `GET /appointments`.
    async fn fetch_appointments(&self) -> DashResult<AppointmentsResponse>;

    /// `POST` bid-accept.
    async fn accept_bid(&self, request: &BidActionRequest) -> DashResult<MutationResponse>;

    /// `POST` bid-reject.
    async fn reject_bid(&self, request: &BidActionRequest) -> DashResult<MutationResponse>;

    /// `POST` start-auction.
    async fn start_auction(&self, product_id: &str) -> DashResult<MutationResponse>;

    /// `POST` re-auction (relist an expired vehicle).
    async fn re_auction(&self, product_id: &str) -> DashResult<MutationResponse>;

    /// `POST` cancel-appointment.
    async fn cancel_appointment(
        &self,
        request: &CancelAppointmentRequest,
    ) -> DashResult<MutationResponse>;
}

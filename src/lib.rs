//! Data and state-management core for a vehicle-sale marketplace dashboard.
//!
//! Tracks bids and offers on vehicles moving through their lifecycle,
//! surfaces live auctions, and orchestrates the owner's actions (accept or
//! reject bids, start auctions, relist expired vehicles, cancel dealer
//! appointments). The presentation layer receives derived view models and
//! forwards user intents; everything stateful lives here.

pub mod config;
pub mod controllers;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod normalize;
pub mod page;
pub mod pager;
pub mod records;
pub mod search;
pub mod sort;
pub mod store;
pub mod traits;
pub mod util;

#[cfg(any(test, feature = "test-support"))]
pub mod mocks;

pub use controllers::{
    AppointmentController, AppointmentsFetchController, AuctionController, BidLifecycleController,
    FetchController,
};
pub use dashboard::Dashboard;
pub use error::{DashResult, DashboardError};
pub use http::HttpApi;
pub use normalize::{normalize, ImageRef, OfferStatus, OfferViewModel};
pub use page::{OfferPage, PageSnapshot};
pub use pager::Pager;
pub use records::{
    AppointmentsResponse, BidActionRequest, BidStatus, CancelAppointmentRequest, MutationResponse,
    OffersResponse, RawAppointment, RawBid, RawVehicleRecord, StructuredError,
};
pub use search::{search, SearchEngine};
pub use sort::{sort_offers, SortController, SortKey};
pub use store::{Collection, DashboardStore, OperationKind, OperationStatus};
pub use traits::{DelayStrategy, MarketplaceApi, RandomDelays, SystemTimeProvider, TimeProvider};

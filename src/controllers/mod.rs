//! Async controllers: fetch per collection, plus the mutation lifecycles.

pub mod appointments;
pub mod auction;
pub mod bids;
pub mod fetch;

pub use appointments::AppointmentController;
pub use auction::AuctionController;
pub use bids::BidLifecycleController;
pub use fetch::{AppointmentsFetchController, FetchController};

//! Raw server-owned record types and API envelopes.
//!
//! Everything here is shaped by the network collaborator and deserialized
//! as-is; derived, render-ready shapes live in [`crate::normalize`].

pub mod appointment;
pub mod bid;
pub mod response;
pub mod vehicle;

pub use appointment::RawAppointment;
pub use bid::{BidStatus, RawBid};
pub use response::{
    AppointmentsResponse, BidActionRequest, CancelAppointmentRequest, MutationResponse,
    OffersResponse, StructuredError,
};
pub use vehicle::{RawImage, RawVehicleRecord, FRONT_VIEW_TAG};

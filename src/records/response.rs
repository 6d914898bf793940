//! Response envelopes and mutation payloads for the dashboard API.
//!
//! These mirror the collaborator-owned network surface: collection reads
//! return `{success, offers|auctions|appointments, total_count?, ...}`,
//! mutations return `{success, message?, error?}` where `error` may carry
//! a structured failure category used for user-facing message mapping.

use serde::{Deserialize, Serialize};

use super::appointment::RawAppointment;
use super::vehicle::RawVehicleRecord;

/// Envelope for the offer/auction collection reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffersResponse {
    pub success: bool,

    /// Dashboard endpoints use `offers`, the live endpoint uses `auctions`;
    /// both land here.
    #[serde(default, alias = "auctions")]
    pub offers: Vec<RawVehicleRecord>,

    #[serde(default)]
    pub total_count: Option<u64>,

    #[serde(default)]
    pub has_offers: Option<bool>,

    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope for the appointments read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentsResponse {
    pub success: bool,

    #[serde(default)]
    pub appointments: Vec<RawAppointment>,

    #[serde(default)]
    pub message: Option<String>,
}

/// Structured failure detail attached to rejected mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Server category, e.g. `DAYS_REMAINING`, `UNAUTHORIZED`,
    /// `NOT_FOUND`, `NO_CASH_OFFER`
    #[serde(rename = "type")]
    pub kind: String,

    /// Set for `DAYS_REMAINING`: how many days until relisting is allowed
    #[serde(default)]
    pub days_remaining: Option<u32>,
}

/// Envelope for mutation responses (bid accept/reject, start auction,
/// re-auction, cancel appointment).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub error: Option<StructuredError>,
}

impl MutationResponse {
    /// A plain success with no message.
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
            error: None,
        }
    }

    /// A generic failure with a message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            error: None,
        }
    }
}

/// Payload for bid accept/reject mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidActionRequest {
    #[serde(rename = "bidId")]
    pub bid_id: String,

    #[serde(rename = "productId")]
    pub product_id: String,

    #[serde(rename = "bidderId")]
    pub bidder_id: String,
}

/// Payload for the cancel-appointment mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelAppointmentRequest {
    #[serde(rename = "appointmentId")]
    pub appointment_id: String,

    /// Owner-supplied cancellation reason. Mandatory; validated locally
    /// before any network call.
    pub notes: String,
}

use serde::{Deserialize, Serialize};

use super::bid::RawBid;

/// Tag value the server uses for the primary exterior shot.
pub const FRONT_VIEW_TAG: &str = "front_view";

/// A vehicle photo reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawImage {
    pub url: String,

    /// Server-side tag, e.g. `front_view`, `interior`, `rear_view`
    #[serde(default)]
    pub tag: Option<String>,
}

/// A vehicle offer as received from the server, with its embedded bids.
/// Immutable from the client's point of view; arrives wholesale per fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawVehicleRecord {
    /// Server identifier for the vehicle listing
    pub product_id: String,

    /// Model year, as the server sends it (string-typed upstream)
    #[serde(default)]
    pub year: String,

    #[serde(default)]
    pub make: String,

    #[serde(default)]
    pub model: String,

    #[serde(default)]
    pub trim: Option<String>,

    #[serde(default)]
    pub vin: Option<String>,

    /// Instant cash-offer amount in dollars
    #[serde(default)]
    pub cash_offer: f64,

    /// RFC3339 timestamp when the live auction ends
    #[serde(default)]
    pub auction_end: Option<String>,

    /// RFC3339 timestamp when this offer expires
    #[serde(default)]
    pub expires_at: Option<String>,

    #[serde(default)]
    pub images: Vec<RawImage>,

    #[serde(default)]
    pub bids: Vec<RawBid>,
}

impl RawVehicleRecord {
    /// Bids eligible for the "highest active bid" computation.
    pub fn active_bids(&self) -> impl Iterator<Item = &RawBid> {
        self.bids.iter().filter(|b| b.is_active())
    }

    /// Whether any bid on this vehicle has been accepted by the owner.
    pub fn has_accepted_bid(&self) -> bool {
        self.bids.iter().any(|b| b.is_accepted)
    }

    /// Look up a bid by id.
    pub fn find_bid(&self, bid_id: &str) -> Option<&RawBid> {
        self.bids.iter().find(|b| b.bid_id == bid_id)
    }
}

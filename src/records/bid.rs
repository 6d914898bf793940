use serde::{Deserialize, Serialize};

/// Server-side status of a single bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BidStatus {
    /// Bid is open and awaiting an owner decision
    Pending,
    /// Owner accepted this bid
    Accepted,
    /// Owner rejected this bid
    Rejected,
}

/// A dealer's bid on a vehicle offer, as received from the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBid {
    /// Server identifier for this bid
    pub bid_id: String,

    /// Bid amount in dollars
    pub amount: f64,

    /// Bidder's account id
    pub bidder_id: String,

    /// Bidder's display name
    #[serde(default)]
    pub bidder_name: String,

    /// Bidder's contact email
    #[serde(default)]
    pub bidder_email: String,

    /// Lifecycle status as recorded server-side
    pub status: BidStatus,

    /// Set when the owner has accepted this bid.
    /// At most one bid per vehicle may carry this flag.
    #[serde(default)]
    pub is_accepted: bool,

    /// Set when the bid's offer window has lapsed
    #[serde(default)]
    pub is_expired: bool,

    /// RFC3339 creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,

    /// RFC3339 acceptance timestamp (set once accepted)
    #[serde(default)]
    pub accepted_at: Option<String>,

    /// RFC3339 expiry timestamp for this bid
    #[serde(default)]
    pub expires_at: Option<String>,

    /// Free-text notes from the bidder
    #[serde(default)]
    pub notes: Option<String>,
}

impl RawBid {
    /// A bid counts toward "highest active bid" iff it is pending and
    /// has not lapsed. An expired bid must never win this computation.
    pub fn is_active(&self) -> bool {
        !self.is_expired && self.status == BidStatus::Pending
    }

    /// Accept/reject eligibility: the owner can only act on a bid that
    /// is neither already accepted nor expired.
    pub fn is_actionable(&self) -> bool {
        !self.is_accepted && !self.is_expired
    }
}

//! Test harness for full-scenario dashboard testing.
//!
//! Wires a `Dashboard` to a scripted mock API, a controllable clock, and
//! an injectable delay strategy, plus fixture builders for raw records.

use std::sync::Arc;
use std::time::Duration;

use offerdash::mocks::{FixedDelays, MockApi, MockTime, ZeroDelays};
use offerdash::{BidStatus, Dashboard, RawBid, RawVehicleRecord};

/// 2024-01-01 00:00:00 UTC; fixtures use offsets from this.
pub const T0: u64 = 1_704_067_200;

#[allow(dead_code)]
pub struct DashboardHarness {
    pub dashboard: Dashboard,
    pub api: Arc<MockApi>,
    pub time: MockTime,
}

#[allow(dead_code)]
impl DashboardHarness {
    /// Harness with every simulated delay and display window at zero.
    pub fn new() -> Self {
        let api = Arc::new(MockApi::new());
        let time = MockTime::new(T0);
        let dashboard = Dashboard::new(api.clone(), Arc::new(time.clone()), Arc::new(ZeroDelays));
        Self {
            dashboard,
            api,
            time,
        }
    }

    /// Harness with one fixed delay everywhere, for tests that observe
    /// in-between states (pending banners, sorting placeholders).
    pub fn with_fixed_delay(delay: Duration) -> Self {
        let api = Arc::new(MockApi::new());
        let time = MockTime::new(T0);
        let dashboard = Dashboard::new(
            api.clone(),
            Arc::new(time.clone()),
            Arc::new(FixedDelays(delay)),
        );
        Self {
            dashboard,
            api,
            time,
        }
    }
}

/// Build a vehicle record with no bids.
#[allow(dead_code)]
pub fn vehicle(id: &str, year: &str, make: &str, model: &str) -> RawVehicleRecord {
    RawVehicleRecord {
        product_id: id.into(),
        year: year.into(),
        make: make.into(),
        model: model.into(),
        trim: None,
        vin: None,
        cash_offer: 8000.0,
        auction_end: None,
        expires_at: None,
        images: vec![],
        bids: vec![],
    }
}

/// Build a pending, unexpired bid.
#[allow(dead_code)]
pub fn pending_bid(id: &str, amount: f64) -> RawBid {
    RawBid {
        bid_id: id.into(),
        amount,
        bidder_id: format!("dealer-{id}"),
        bidder_name: "Test Dealer".into(),
        bidder_email: "dealer@example.com".into(),
        status: BidStatus::Pending,
        is_accepted: false,
        is_expired: false,
        created_at: None,
        accepted_at: None,
        expires_at: None,
        notes: None,
    }
}

//! Accept/reject lifecycle scenarios.

use std::time::Duration;

use offerdash::{BidActionRequest, Collection, OperationKind};

use crate::common::harness::{pending_bid, vehicle, DashboardHarness};

fn seeded_harness(harness: &DashboardHarness) {
    let mut record = vehicle("p1", "2019", "Honda", "Civic");
    record.bids.push(pending_bid("b1", 15000.0));
    harness.api.set_offers(Collection::Pending, vec![record]);
}

fn accept_request() -> BidActionRequest {
    BidActionRequest {
        bid_id: "b1".into(),
        product_id: "p1".into(),
        bidder_id: "dealer-b1".into(),
    }
}

#[tokio::test]
async fn accepting_a_pending_bid_runs_the_full_lifecycle() {
    // A 15000 pending bid is accepted: Idle -> Pending -> Succeeded, the
    // owning collection is refetched, and after the display window the
    // confirmation closes and the status returns to idle.
    let harness = DashboardHarness::with_fixed_delay(Duration::from_millis(60));
    seeded_harness(&harness);
    harness.dashboard.page(Collection::Pending).refresh().await;

    let store = harness.dashboard.store().clone();
    assert!(store.operation(OperationKind::AcceptBid).await.is_idle());

    let fetches_before = harness.api.fetch_count(Collection::Pending);
    harness
        .dashboard
        .bids()
        .accept(Collection::Pending, accept_request())
        .await
        .unwrap();

    // Mutation sent, collection refetched, success banner up.
    assert_eq!(harness.api.mutation_count(OperationKind::AcceptBid), 1);
    assert_eq!(
        harness.api.fetch_count(Collection::Pending),
        fetches_before + 1
    );
    let status = store.operation(OperationKind::AcceptBid).await;
    assert!(status.success);
    assert!(!status.pending);

    // After the window the confirmation auto-closes back to idle.
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(store.operation(OperationKind::AcceptBid).await.is_idle());
}

#[tokio::test]
async fn second_accept_while_pending_is_rejected() {
    let harness = DashboardHarness::with_fixed_delay(Duration::from_millis(60));
    seeded_harness(&harness);
    harness.dashboard.page(Collection::Pending).refresh().await;

    let store = harness.dashboard.store().clone();
    // Force the pending state directly; the controller assumes
    // at-most-one-in-flight per kind, not per bid.
    store.begin_operation(OperationKind::AcceptBid).await.unwrap();

    let result = harness
        .dashboard
        .bids()
        .accept(Collection::Pending, accept_request())
        .await;

    assert!(result.is_err());
    assert_eq!(harness.api.mutation_count(OperationKind::AcceptBid), 0);
}

#[tokio::test]
async fn rejecting_a_bid_refetches_and_resets() {
    let harness = DashboardHarness::new();
    seeded_harness(&harness);
    harness.dashboard.page(Collection::Pending).refresh().await;

    harness
        .dashboard
        .bids()
        .reject(Collection::Pending, accept_request())
        .await
        .unwrap();

    assert_eq!(harness.api.mutation_count(OperationKind::RejectBid), 1);
    let sent = harness.api.last_bid_action().unwrap();
    assert_eq!(sent.bid_id, "b1");
    assert_eq!(sent.product_id, "p1");

    tokio::time::sleep(Duration::from_millis(50)).await;
    let status = harness
        .dashboard
        .store()
        .operation(OperationKind::RejectBid)
        .await;
    assert!(status.is_idle());
}

#[tokio::test]
async fn accepting_an_expired_bid_is_blocked_locally() {
    let harness = DashboardHarness::new();
    let mut record = vehicle("p1", "2019", "Honda", "Civic");
    let mut bid = pending_bid("b1", 15000.0);
    bid.is_expired = true;
    record.bids.push(bid);
    harness.api.set_offers(Collection::Pending, vec![record]);
    harness.dashboard.page(Collection::Pending).refresh().await;

    let result = harness
        .dashboard
        .bids()
        .accept(Collection::Pending, accept_request())
        .await;

    assert!(result.is_err());
    assert_eq!(harness.api.mutation_count(OperationKind::AcceptBid), 0);
}

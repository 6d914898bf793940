//! Start-auction, re-auction, and appointment-cancellation scenarios.

use std::time::Duration;

use offerdash::{Collection, DashboardError, MutationResponse, OperationKind, StructuredError};

use crate::common::harness::{vehicle, DashboardHarness};

#[tokio::test]
async fn re_auction_with_days_remaining_maps_to_message_and_mutates_nothing() {
    let harness = DashboardHarness::new();
    harness
        .api
        .set_offers(Collection::Previous, vec![vehicle("p1", "2018", "Ford", "F-150")]);
    harness.dashboard.page(Collection::Previous).refresh().await;
    let fetches_before = harness.api.fetch_count(Collection::Previous);

    harness.api.push_mutation_result(
        OperationKind::ReAuction,
        MutationResponse {
            success: false,
            message: None,
            error: Some(StructuredError {
                kind: "DAYS_REMAINING".into(),
                days_remaining: Some(3),
            }),
        },
    );

    harness.dashboard.auctions().re_auction("p1").await.unwrap();

    let status = harness
        .dashboard
        .store()
        .operation(OperationKind::ReAuction)
        .await;
    let message = status.error.unwrap();
    assert!(message.contains("3 more days"), "got: {message}");

    // Failure triggers no refetch and leaves the collection untouched.
    assert_eq!(harness.api.fetch_count(Collection::Previous), fetches_before);
    let slice = harness.dashboard.store().collection(Collection::Previous).await;
    assert_eq!(slice.records.len(), 1);
}

#[tokio::test]
async fn re_auction_success_refetches_previous_offers() {
    let harness = DashboardHarness::new();
    harness
        .api
        .set_offers(Collection::Previous, vec![vehicle("p1", "2018", "Ford", "F-150")]);

    let fetches_before = harness.api.fetch_count(Collection::Previous);
    harness.dashboard.auctions().re_auction("p1").await.unwrap();

    assert_eq!(
        harness.api.fetch_count(Collection::Previous),
        fetches_before + 1
    );
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(harness
        .dashboard
        .store()
        .operation(OperationKind::ReAuction)
        .await
        .is_idle());
}

#[tokio::test]
async fn start_auction_failure_is_surfaced_until_dismissed() {
    let harness = DashboardHarness::new();
    harness.api.push_mutation_result(
        OperationKind::StartAuction,
        MutationResponse::failed("vehicle not yet eligible"),
    );

    harness.dashboard.auctions().start_auction("p1").await.unwrap();

    tokio::time::sleep(Duration::from_millis(50)).await;
    let status = harness
        .dashboard
        .store()
        .operation(OperationKind::StartAuction)
        .await;
    assert_eq!(status.error.as_deref(), Some("vehicle not yet eligible"));

    harness
        .dashboard
        .auctions()
        .dismiss(OperationKind::StartAuction)
        .await;
    assert!(harness
        .dashboard
        .store()
        .operation(OperationKind::StartAuction)
        .await
        .is_idle());
}

#[tokio::test]
async fn cancel_appointment_with_empty_reason_never_reaches_the_network() {
    let harness = DashboardHarness::new();

    let result = harness.dashboard.appointments().cancel("a1", "").await;

    assert!(matches!(result, Err(DashboardError::Validation(_))));
    assert_eq!(
        harness.api.mutation_count(OperationKind::CancelAppointment),
        0
    );
    assert_eq!(harness.api.appointments_fetch_count(), 0);
}

#[tokio::test]
async fn cancel_appointment_success_refetches_appointments() {
    let harness = DashboardHarness::new();

    harness
        .dashboard
        .appointments()
        .cancel("a1", "found a better slot")
        .await
        .unwrap();

    assert_eq!(
        harness.api.mutation_count(OperationKind::CancelAppointment),
        1
    );
    assert_eq!(harness.api.appointments_fetch_count(), 1);
}

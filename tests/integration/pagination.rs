//! Incremental-loading scenarios through the composed page surface.

use offerdash::Collection;

use crate::common::harness::{vehicle, DashboardHarness};

#[tokio::test]
async fn seven_pending_offers_with_page_size_five() {
    let harness = DashboardHarness::new();
    let records = (0..7)
        .map(|i| vehicle(&format!("p{i}"), "2019", "Honda", "Civic"))
        .collect();
    harness.api.set_offers(Collection::Pending, records);

    let page = harness
        .dashboard
        .page_with_size(Collection::Pending, 5);
    page.refresh().await;

    let snap = page.snapshot().await;
    assert_eq!(snap.items.len(), 5);
    assert!(snap.has_more);
    assert_eq!(snap.remaining_count, 2);

    assert!(page.load_more().await);

    let snap = page.snapshot().await;
    assert_eq!(snap.items.len(), 7);
    assert!(!snap.has_more);
    assert_eq!(snap.remaining_count, 0);
}

#[tokio::test]
async fn load_more_to_exhaustion_has_no_duplicates_or_gaps() {
    let harness = DashboardHarness::new();
    let records = (0..12)
        .map(|i| vehicle(&format!("p{i:02}"), "2019", "Honda", "Civic"))
        .collect();
    harness.api.set_offers(Collection::Pending, records);

    let page = harness
        .dashboard
        .page_with_size(Collection::Pending, 5);
    page.refresh().await;

    while page.snapshot().await.has_more {
        assert!(page.load_more().await);
    }

    let ids: Vec<_> = page
        .snapshot()
        .await
        .items
        .iter()
        .map(|o| o.product_id.clone())
        .collect();
    let expected: Vec<_> = (0..12).map(|i| format!("p{i:02}")).collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn refetch_with_different_length_resets_pagination() {
    let harness = DashboardHarness::new();
    harness.api.set_offers(
        Collection::Pending,
        (0..10)
            .map(|i| vehicle(&format!("p{i}"), "2019", "Honda", "Civic"))
            .collect(),
    );

    let page = harness
        .dashboard
        .page_with_size(Collection::Pending, 5);
    page.refresh().await;
    page.snapshot().await;
    page.load_more().await;
    assert_eq!(page.snapshot().await.items.len(), 10);

    // Server-side change: one vehicle sold, collection shrinks.
    harness.api.set_offers(
        Collection::Pending,
        (0..9)
            .map(|i| vehicle(&format!("p{i}"), "2019", "Honda", "Civic"))
            .collect(),
    );
    page.refresh().await;

    let snap = page.snapshot().await;
    assert_eq!(snap.items.len(), 5);
    assert_eq!(snap.remaining_count, 4);
}

#[tokio::test]
async fn same_length_resort_preserves_pagination() {
    let harness = DashboardHarness::new();
    harness.api.set_offers(
        Collection::Pending,
        (0..10)
            .map(|i| vehicle(&format!("p{i}"), "2019", "Honda", "Civic"))
            .collect(),
    );

    let page = harness
        .dashboard
        .page_with_size(Collection::Pending, 5);
    page.refresh().await;
    page.snapshot().await;
    page.load_more().await;

    // Re-sorting the same underlying collection keeps the grown window.
    page.set_sort_key(offerdash::SortKey::NameDesc).await;
    assert_eq!(page.snapshot().await.items.len(), 10);
}

//! Search and sort scenarios through the composed page surface.

use std::time::Duration;

use offerdash::{Collection, SortKey};

use crate::common::harness::{pending_bid, vehicle, DashboardHarness};

fn mixed_fleet() -> Vec<offerdash::RawVehicleRecord> {
    let mut civic = vehicle("p1", "2019", "Honda", "Civic");
    civic.bids.push(pending_bid("b1", 15000.0));
    let mut camry = vehicle("p2", "2020", "Toyota", "Camry");
    camry.bids.push(pending_bid("b2", 12000.0));
    let mut accord = vehicle("p3", "2019", "Honda", "Accord");
    accord.bids.push(pending_bid("b3", 18000.0));
    vec![civic, camry, accord]
}

#[tokio::test]
async fn searching_2019_honda_filters_and_clearing_restores() {
    let harness = DashboardHarness::new();
    harness.api.set_offers(Collection::Pending, mixed_fleet());

    let page = harness.dashboard.page(Collection::Pending);
    page.refresh().await;

    page.set_query("2019 Honda");
    tokio::time::sleep(Duration::from_millis(50)).await;

    let snap = page.snapshot().await;
    assert_eq!(snap.items.len(), 2);
    assert!(snap
        .items
        .iter()
        .all(|o| o.vehicle_name.contains("2019 Honda")));

    page.clear_search();
    let snap = page.snapshot().await;
    let ids: Vec<_> = snap.items.iter().map(|o| o.product_id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3"]);
}

#[tokio::test]
async fn one_query_filters_every_collection_independently() {
    let harness = DashboardHarness::new();
    harness.api.set_offers(Collection::Pending, mixed_fleet());
    harness.api.set_offers(
        Collection::Live,
        vec![
            vehicle("p9", "2019", "Honda", "Pilot"),
            vehicle("p10", "2022", "Kia", "Sorento"),
        ],
    );

    let pending = harness.dashboard.page(Collection::Pending);
    let live = harness.dashboard.page(Collection::Live);
    pending.refresh().await;
    live.refresh().await;

    // The query is shared: typing on one page filters both collections,
    // each against its own records.
    pending.set_query("honda");
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(pending.snapshot().await.items.len(), 2);
    let live_snap = live.snapshot().await;
    assert_eq!(live_snap.items.len(), 1);
    assert_eq!(live_snap.items[0].product_id, "p9");
    assert_eq!(live.query(), "honda");
}

#[tokio::test]
async fn sorting_by_amount_reorders_after_the_reveal() {
    let harness = DashboardHarness::new();
    harness.api.set_offers(Collection::Pending, mixed_fleet());

    let page = harness.dashboard.page(Collection::Pending);
    page.refresh().await;

    assert!(page.set_sort_key(SortKey::AmountDesc).await);

    let snap = page.snapshot().await;
    let amounts: Vec<_> = snap.items.iter().map(|o| o.highest_bid).collect();
    assert_eq!(amounts, vec![18000.0, 15000.0, 12000.0]);
}

#[tokio::test]
async fn sort_placeholder_hides_items_until_reveal() {
    let harness = DashboardHarness::with_fixed_delay(Duration::from_millis(60));
    harness.api.set_offers(Collection::Pending, mixed_fleet());

    let page = harness.dashboard.page(Collection::Pending);
    page.refresh().await;

    let sorter = page.clone();
    let task = tokio::spawn(async move { sorter.set_sort_key(SortKey::AmountDesc).await });
    tokio::time::sleep(Duration::from_millis(15)).await;

    let snap = page.snapshot().await;
    assert!(snap.sorting);
    assert!(snap.items.is_empty());

    assert!(task.await.unwrap());
    let snap = page.snapshot().await;
    assert!(!snap.sorting);
    assert_eq!(snap.items.len(), 3);
}

#[tokio::test]
async fn reselecting_the_current_key_skips_the_delay() {
    // A 60s delay would time the test out if the no-op path recomputed.
    let harness = DashboardHarness::with_fixed_delay(Duration::from_secs(60));
    harness.api.set_offers(Collection::Pending, mixed_fleet());

    let page = harness.dashboard.page(Collection::Pending);
    assert!(!page.set_sort_key(SortKey::default()).await);
}

#[tokio::test]
async fn sort_order_is_stable_across_repeated_snapshots() {
    let harness = DashboardHarness::new();
    harness.api.set_offers(Collection::Pending, mixed_fleet());

    let page = harness.dashboard.page(Collection::Pending);
    page.refresh().await;
    page.set_sort_key(SortKey::DateDesc).await;

    let first: Vec<_> = page
        .snapshot()
        .await
        .items
        .iter()
        .map(|o| o.product_id.clone())
        .collect();
    let second: Vec<_> = page
        .snapshot()
        .await
        .items
        .iter()
        .map(|o| o.product_id.clone())
        .collect();
    assert_eq!(first, second);
}

//! Fetch, error-surfacing, and retry scenarios.

use offerdash::Collection;

use crate::common::harness::{vehicle, DashboardHarness};

#[tokio::test]
async fn refresh_all_populates_every_collection_and_appointments() {
    let harness = DashboardHarness::new();
    for (i, collection) in Collection::ALL.iter().enumerate() {
        harness.api.set_offers(
            *collection,
            (0..=i)
                .map(|n| vehicle(&format!("{collection:?}-{n}"), "2021", "Ford", "F-150"))
                .collect(),
        );
    }
    harness.api.set_appointments(vec![]);

    harness.dashboard.refresh_all().await;

    for (i, collection) in Collection::ALL.iter().enumerate() {
        let slice = harness.dashboard.store().collection(*collection).await;
        assert_eq!(slice.records.len(), i + 1, "{collection:?}");
        assert!(!slice.loading);
        assert!(slice.error.is_none());
    }
    assert_eq!(harness.api.appointments_fetch_count(), 1);
}

#[tokio::test]
async fn fetch_failure_surfaces_on_the_page_and_keeps_prior_records() {
    let harness = DashboardHarness::new();
    harness
        .api
        .set_offers(Collection::Pending, vec![vehicle("p1", "2018", "Mazda", "3")]);

    let page = harness.dashboard.page(Collection::Pending);
    page.refresh().await;
    assert_eq!(page.snapshot().await.items.len(), 1);

    harness
        .api
        .fail_next_fetch(Collection::Pending, "maintenance window");
    page.refresh().await;

    let snap = page.snapshot().await;
    assert_eq!(snap.error.as_deref(), Some("maintenance window"));
    assert!(!snap.loading);
    // Stale records stay visible under the error banner.
    assert_eq!(snap.items.len(), 1);
}

#[tokio::test]
async fn retry_after_failure_clears_the_error() {
    let harness = DashboardHarness::new();
    harness
        .api
        .fail_next_fetch_network(Collection::Live, "connection refused");

    let page = harness.dashboard.page(Collection::Live);
    page.refresh().await;
    assert!(page.snapshot().await.error.is_some());

    harness.api.set_offers(
        Collection::Live,
        vec![
            vehicle("l1", "2022", "Kia", "Telluride"),
            vehicle("l2", "2023", "Kia", "Sorento"),
        ],
    );
    page.refresh().await;

    let snap = page.snapshot().await;
    assert!(snap.error.is_none());
    assert_eq!(snap.items.len(), 2);
    assert_eq!(harness.api.fetch_count(Collection::Live), 2);
}

#[tokio::test]
async fn each_collection_slice_is_isolated() {
    let harness = DashboardHarness::new();
    harness
        .api
        .set_offers(Collection::Accepted, vec![vehicle("a1", "2020", "Subaru", "Outback")]);
    harness
        .api
        .fail_next_fetch(Collection::Previous, "flaky");

    harness.dashboard.page(Collection::Accepted).refresh().await;
    harness.dashboard.page(Collection::Previous).refresh().await;

    let accepted = harness.dashboard.store().collection(Collection::Accepted).await;
    let previous = harness.dashboard.store().collection(Collection::Previous).await;
    assert!(accepted.error.is_none());
    assert_eq!(accepted.records.len(), 1);
    assert_eq!(previous.error.as_deref(), Some("flaky"));
}

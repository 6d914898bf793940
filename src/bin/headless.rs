//! Headless smoke driver: fetch every collection from a real backend and
//! log what the dashboard would render.

use std::sync::Arc;

use offerdash::{Collection, Dashboard, HttpApi};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let base_url =
        std::env::var("OFFERDASH_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".into());
    info!(%base_url, "Starting headless dashboard");

    let dashboard = Dashboard::with_defaults(Arc::new(HttpApi::new(base_url)));
    dashboard.refresh_all().await;

    for collection in Collection::ALL {
        let page = dashboard.page(collection);
        let snapshot = page.snapshot().await;
        match snapshot.error {
            Some(message) => {
                error!(collection = collection.label(), %message, "Fetch failed")
            }
            None => info!(
                collection = collection.label(),
                total = snapshot.total_count,
                visible = snapshot.items.len(),
                has_more = snapshot.has_more,
                "Collection loaded"
            ),
        }
    }

    let appointments = dashboard.store().appointments().await;
    info!(count = appointments.records.len(), "Appointments loaded");
}

//! HTTP implementation of the marketplace API.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{DashResult, DashboardError};
use crate::records::{
    AppointmentsResponse, BidActionRequest, CancelAppointmentRequest, MutationResponse,
    OffersResponse,
};
use crate::store::Collection;
use crate::traits::MarketplaceApi;

/// `MarketplaceApi` over the real backend.
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    const fn collection_path(collection: Collection) -> &'static str {
        match collection {
            Collection::Pending => "/dashboard/pending-offers",
            Collection::Previous => "/dashboard/previous-offers",
            Collection::Accepted => "/dashboard/accepted-offers",
            Collection::Live => "/live-auctions",
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> DashResult<T> {
        let url = self.url(path);
        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::Network(format!("GET {path} failed: {e}")))?;

        if !response.status().is_success() {
            return Err(DashboardError::Fetch(format!(
                "GET {path} returned {}",
                response.status()
            )));
        }
        response
            .json()
            .await
            .map_err(|e| DashboardError::Fetch(format!("Malformed response from {path}: {e}")))
    }

    async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> DashResult<MutationResponse> {
        let url = self.url(path);
        debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| DashboardError::Network(format!("POST {path} failed: {e}")))?;

        // A non-2xx mutation still carries a structured error body when the
        // server rejected it at the application level; fall back to the
        // status line otherwise.
        let status = response.status();
        match response.json::<MutationResponse>().await {
            Ok(parsed) => Ok(parsed),
            Err(_) if !status.is_success() => Err(DashboardError::Network(format!(
                "POST {path} returned {status}"
            ))),
            Err(e) => Err(DashboardError::Operation(format!(
                "Malformed response from {path}: {e}"
            ))),
        }
    }
}

#[async_trait]
impl MarketplaceApi for HttpApi {
    async fn fetch_offers(&self, collection: Collection) -> DashResult<OffersResponse> {
        self.get(Self::collection_path(collection)).await
    }

    async fn fetch_appointments(&self) -> DashResult<AppointmentsResponse> {
        self.get("/appointments").await
    }

    async fn accept_bid(&self, request: &BidActionRequest) -> DashResult<MutationResponse> {
        self.post("/bids/accept", request).await
    }

    async fn reject_bid(&self, request: &BidActionRequest) -> DashResult<MutationResponse> {
        self.post("/bids/reject", request).await
    }

    async fn start_auction(&self, product_id: &str) -> DashResult<MutationResponse> {
        self.post("/auctions/start", &serde_json::json!({ "productId": product_id }))
            .await
    }

    async fn re_auction(&self, product_id: &str) -> DashResult<MutationResponse> {
        self.post("/auctions/re-auction", &serde_json::json!({ "productId": product_id }))
            .await
    }

    async fn cancel_appointment(
        &self,
        request: &CancelAppointmentRequest,
    ) -> DashResult<MutationResponse> {
        self.post("/appointments/cancel", request).await
    }
}

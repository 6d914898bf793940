//! Normalizer: raw server records to flat, render-ready view models.
//!
//! Everything here is a pure function over the latest store snapshot.
//! View models are recomputed on every read and never mutated in place;
//! a change to the underlying raw record requires recomputation. Shape
//! errors in raw data (malformed dates, missing fields) are recovered
//! with safe defaults rather than surfaced.

use serde::Serialize;

use crate::config;
use crate::records::{RawBid, RawVehicleRecord, FRONT_VIEW_TAG};
use crate::store::Collection;
use crate::traits::TimeProvider;
use crate::util::{parse_timestamp, parse_year};

/// Unified lifecycle status across all four dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    /// Live auction, no accepted bid yet
    Live,
    /// Pending offer with an active bid expiring soon
    Urgent,
    /// Bid accepted (also the first post-acceptance stage)
    Accepted,
    /// Pending offer, nothing urgent
    Pending,
    /// Previous offer whose window has lapsed
    Expired,
    /// Previous offer still inside its window
    Active,
    /// Post-acceptance: paperwork in progress
    Paperwork,
    /// Post-acceptance: pickup scheduled
    PickupScheduled,
    /// Post-acceptance: sale completed
    Completed,
}

/// Which image the presentation layer should lead with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    Url(String),
    /// No usable image; the UI shows a blank placeholder
    Placeholder,
}

/// Derived, render-ready shape for one vehicle offer.
/// Created fresh on every normalizer pass; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferViewModel {
    pub product_id: String,
    /// Synthesized "{year} {make} {model}" display name
    pub vehicle_name: String,
    pub year: u16,
    pub trim: Option<String>,
    pub vin: Option<String>,
    pub cash_offer: f64,
    /// Highest active bid, or the cash offer when no bid is active
    pub highest_bid: f64,
    pub active_bid_count: usize,
    pub status: OfferStatus,
    /// Seconds until the auction/offer window closes (0 once closed)
    pub time_remaining_secs: u64,
    /// Post-acceptance views only: projected completion timestamp
    pub estimated_completion: Option<u64>,
    pub image: ImageRef,
}

/// Convert a raw collection into view models for the given dashboard view.
/// Does not mutate its input and never fails.
pub fn normalize(
    collection: Collection,
    records: &[RawVehicleRecord],
    time: &dyn TimeProvider,
) -> Vec<OfferViewModel> {
    records
        .iter()
        .map(|record| normalize_record(collection, record, time))
        .collect()
}

fn normalize_record(
    collection: Collection,
    record: &RawVehicleRecord,
    time: &dyn TimeProvider,
) -> OfferViewModel {
    let now = time.now_unix();
    let year = parse_year(&record.year);
    let vehicle_name = format!("{} {} {}", record.year.trim(), record.make, record.model)
        .trim()
        .to_string();

    let highest_bid = highest_active_bid(record)
        .map(|b| b.amount)
        .unwrap_or(record.cash_offer);
    let active_bid_count = record.active_bids().count();

    let (status, estimated_completion) = derive_status(collection, record, now, time);

    let window_end = record
        .auction_end
        .as_deref()
        .or(record.expires_at.as_deref());
    let time_remaining_secs = parse_timestamp(window_end, time).saturating_sub(now);

    OfferViewModel {
        product_id: record.product_id.clone(),
        vehicle_name,
        year,
        trim: record.trim.clone(),
        vin: record.vin.clone(),
        cash_offer: record.cash_offer,
        highest_bid,
        active_bid_count,
        status,
        time_remaining_secs,
        estimated_completion,
        image: front_image(record),
    }
}

/// Highest active bid on a record. Ties go to the first-encountered bid.
pub fn highest_active_bid(record: &RawVehicleRecord) -> Option<&RawBid> {
    record.active_bids().fold(None, |best, bid| match best {
        Some(b) if b.amount.total_cmp(&bid.amount).is_ge() => Some(b),
        _ => Some(bid),
    })
}

/// Per-view status derivation.
fn derive_status(
    collection: Collection,
    record: &RawVehicleRecord,
    now: u64,
    time: &dyn TimeProvider,
) -> (OfferStatus, Option<u64>) {
    match collection {
        Collection::Live => {
            if record.has_accepted_bid() {
                (OfferStatus::Accepted, None)
            } else {
                (OfferStatus::Live, None)
            }
        }
        Collection::Pending => {
            let urgent = record.active_bids().any(|bid| {
                let expiry = parse_timestamp(bid.expires_at.as_deref(), time);
                expiry.saturating_sub(now) <= config::URGENT_WINDOW_SECS
            });
            if urgent {
                (OfferStatus::Urgent, None)
            } else {
                (OfferStatus::Pending, None)
            }
        }
        Collection::Accepted => {
            let accepted_at = record
                .bids
                .iter()
                .find(|b| b.is_accepted)
                .map(|b| parse_timestamp(b.accepted_at.as_deref(), time))
                .unwrap_or(now);
            let (status, eta_offset) = accepted_stage(now.saturating_sub(accepted_at));
            (status, Some(accepted_at + eta_offset))
        }
        Collection::Previous => {
            let expiry = parse_timestamp(record.expires_at.as_deref(), time);
            if expiry < now {
                (OfferStatus::Expired, None)
            } else {
                (OfferStatus::Active, None)
            }
        }
    }
}

/// Post-acceptance stage timer: stage plus the estimated-completion offset
/// from acceptance time.
const fn accepted_stage(since_acceptance: u64) -> (OfferStatus, u64) {
    if since_acceptance < config::STAGE_ACCEPTED_SECS {
        (OfferStatus::Accepted, config::ETA_ACCEPTED_SECS)
    } else if since_acceptance < config::STAGE_PAPERWORK_SECS {
        (OfferStatus::Paperwork, config::ETA_PAPERWORK_SECS)
    } else if since_acceptance < config::STAGE_PICKUP_SECS {
        (OfferStatus::PickupScheduled, config::ETA_PICKUP_SECS)
    } else {
        (OfferStatus::Completed, config::ETA_COMPLETED_SECS)
    }
}

/// Prefer the `front_view`-tagged image, else the first, else a placeholder.
fn front_image(record: &RawVehicleRecord) -> ImageRef {
    record
        .images
        .iter()
        .find(|img| img.tag.as_deref() == Some(FRONT_VIEW_TAG))
        .or_else(|| record.images.first())
        .map(|img| ImageRef::Url(img.url.clone()))
        .unwrap_or(ImageRef::Placeholder)
}

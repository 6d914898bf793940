//! Configuration constants for the dashboard core.
//!
//! This module centralizes magic numbers and tuning values
//! to improve maintainability and enable easier tuning.

/// Debounce interval for the free-text search box, in milliseconds.
/// Keystrokes are not applied until the query has been stable this long.
pub const SEARCH_DEBOUNCE_MS: u64 = 1000;

/// Simulated latency range for re-sorting a collection, in milliseconds.
/// The previously rendered order stays hidden until the delay elapses.
pub const SORT_DELAY_MS: std::ops::RangeInclusive<u64> = 500..=1500;

/// Simulated latency range for "load more" pagination, in milliseconds.
pub const LOAD_MORE_DELAY_MS: std::ops::RangeInclusive<u64> = 800..=1500;

/// How long an accept/reject success banner stays up before auto-dismiss.
pub const BID_SUCCESS_WINDOW_MS: u64 = 2000;

/// How long a start-auction success banner stays up before auto-dismiss.
pub const START_AUCTION_SUCCESS_WINDOW_MS: u64 = 3000;

/// How long a re-auction success banner stays up before auto-dismiss.
/// Longer than bid operations so the relisted-vehicle message is readable.
pub const RE_AUCTION_SUCCESS_WINDOW_MS: u64 = 5000;

/// How long a cancel-appointment success banner stays up before auto-dismiss.
pub const CANCEL_APPOINTMENT_SUCCESS_WINDOW_MS: u64 = 3000;

/// A pending offer becomes `Urgent` when an active bid expires within this window.
pub const URGENT_WINDOW_SECS: u64 = 2 * 3600;

/// Accepted-offer stage thresholds, in seconds since acceptance.
/// - Under one day: still `Accepted`.
/// - Under three days: `Paperwork`.
/// - Under seven days: `PickupScheduled`.
/// - Seven days or more: `Completed`.
pub const STAGE_ACCEPTED_SECS: u64 = 24 * 3600;
pub const STAGE_PAPERWORK_SECS: u64 = 3 * 24 * 3600;
pub const STAGE_PICKUP_SECS: u64 = 7 * 24 * 3600;

/// Estimated-completion offsets from acceptance time, per stage, in seconds.
pub const ETA_ACCEPTED_SECS: u64 = 5 * 24 * 3600;
pub const ETA_PAPERWORK_SECS: u64 = 7 * 24 * 3600;
pub const ETA_PICKUP_SECS: u64 = 10 * 24 * 3600;
pub const ETA_COMPLETED_SECS: u64 = 7 * 24 * 3600;

/// Default page size for the incremental loader.
pub const DEFAULT_PAGE_SIZE: usize = 5;

//! Utility functions shared across the dashboard crate.

use chrono::{DateTime, NaiveDateTime};

use crate::traits::TimeProvider;

/// Parse a server timestamp string into Unix seconds, falling back to the
/// provided clock's "now" on anything malformed or missing.
///
/// The dashboard must never crash over one bad record, so shape errors in
/// date fields are recovered here rather than propagated.
pub fn parse_timestamp(raw: Option<&str>, time: &dyn TimeProvider) -> u64 {
    let Some(raw) = raw else {
        return time.now_unix();
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        let secs = parsed.timestamp();
        if secs >= 0 {
            return secs as u64;
        }
    }

    // Some endpoints send a bare "YYYY-MM-DD HH:MM:SS" without an offset;
    // treat it as UTC.
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        let secs = parsed.and_utc().timestamp();
        if secs >= 0 {
            return secs as u64;
        }
    }

    time.now_unix()
}

/// Parse a year string into a numeric year, falling back to 0.
pub fn parse_year(raw: &str) -> u16 {
    raw.trim().parse().unwrap_or(0)
}

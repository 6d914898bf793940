//! Free-text search over the offer collections.
//!
//! One query string is shared across all four collections; each is
//! filtered independently against the same debounced text. Result sets
//! are never stored — they are recomputed from the live collections on
//! every read, so search output can never lag behind a refetch.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;

use crate::normalize::OfferViewModel;
use crate::traits::DelayStrategy;

/// Case-insensitive substring match against the synthesized vehicle name.
/// An empty query is a pass-through: every item, original order.
pub fn search(query: &str, collection: &[OfferViewModel]) -> Vec<OfferViewModel> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return collection.to_vec();
    }
    collection
        .iter()
        .filter(|offer| offer.vehicle_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Holds the visible query plus its debounced echo.
///
/// Keystrokes update the visible query immediately but only reach the
/// debounced value once the input has been stable for the debounce
/// interval; each new keystroke cancels the previous timer.
#[derive(Clone)]
pub struct SearchEngine {
    query: Arc<RwLock<String>>,
    debounced: Arc<RwLock<String>>,
    delays: Arc<dyn DelayStrategy>,
    timer: Arc<Mutex<Option<CancellationToken>>>,
}

impl SearchEngine {
    pub fn new(delays: Arc<dyn DelayStrategy>) -> Self {
        Self {
            query: Arc::new(RwLock::new(String::new())),
            debounced: Arc::new(RwLock::new(String::new())),
            delays,
            timer: Arc::new(Mutex::new(None)),
        }
    }

    /// The text as typed, before debouncing.
    pub fn query(&self) -> String {
        self.query.read().clone()
    }

    /// The debounced query actually applied to the collections.
    pub fn debounced_query(&self) -> String {
        self.debounced.read().clone()
    }

    /// Record a keystroke and restart the debounce timer.
    pub fn set_query(&self, text: &str) {
        *self.query.write() = text.to_string();

        let token = CancellationToken::new();
        if let Some(old) = self.timer.lock().replace(token.clone()) {
            old.cancel();
        }

        let debounced = self.debounced.clone();
        let applied = text.to_string();
        let delay = self.delays.search_debounce();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    *debounced.write() = applied;
                }
            }
        });
    }

    /// Clear the search immediately, skipping the debounce.
    pub fn clear(&self) {
        if let Some(token) = self.timer.lock().take() {
            token.cancel();
        }
        self.query.write().clear();
        self.debounced.write().clear();
    }

    /// Filter a collection against the current debounced query.
    pub fn apply(&self, collection: &[OfferViewModel]) -> Vec<OfferViewModel> {
        search(&self.debounced.read(), collection)
    }
}

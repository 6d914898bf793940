//! Trait abstractions for dependency injection and testability.
//!
//! This module provides trait-based abstractions for external dependencies
//! and timing, enabling unit testing without a real backend and without
//! waiting out the UX pacing delays.

pub mod api;
pub mod delay;
pub mod time;

// Re-export all traits for crate-internal use.
// The public API surface is controlled by lib.rs re-exports.
pub use api::MarketplaceApi;
pub use delay::DelayStrategy;
pub use time::TimeProvider;

// Re-export default implementations
pub use delay::RandomDelays;
pub use time::SystemTimeProvider;

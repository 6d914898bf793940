//! Mock implementations for testing.
//!
//! Available to integration tests and downstream harnesses via the
//! `test-support` feature.

pub mod api;
pub mod delay;
pub mod time;

pub use api::MockApi;
pub use delay::{FixedDelays, ZeroDelays};
pub use time::MockTime;

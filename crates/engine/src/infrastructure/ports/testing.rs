//! Clock and randomness ports.
//!
//! Time and randomness are injected so cooldown windows and spawn
//! selection stay deterministic under test.

use chrono::{DateTime, Utc};

/// Time access.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Randomness access.
pub trait RandomPort: Send + Sync {
    /// Returns a value in the inclusive range `[min, max]`.
    fn gen_range(&self, min: i32, max: i32) -> i32;
}

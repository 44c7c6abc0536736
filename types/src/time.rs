//! Timestamp type shared across the client.
//!
//! Timestamps are Unix epoch seconds (UTC), matching what the canister
//! reports in `lock_until` and `last_keep_alive`. The client's clock may
//! skew from the canister's; every time-based conclusion drawn locally is
//! advisory, never authoritative.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Get the current system time as a `Timestamp`.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_secs();
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Seconds elapsed since this timestamp (relative to `now`).
    pub fn elapsed_since(&self, now: Timestamp) -> u64 {
        now.0.saturating_sub(self.0)
    }

    /// Whether this timestamp + duration has passed relative to `now`.
    /// Inclusive: equality counts as expired.
    pub fn has_expired(&self, duration_secs: u64, now: Timestamp) -> bool {
        now.0 >= self.0.saturating_add(duration_secs)
    }

    pub fn saturating_add_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_boundary_is_inclusive() {
        let start = Timestamp::new(1000);
        assert!(!start.has_expired(60, Timestamp::new(1059)));
        assert!(start.has_expired(60, Timestamp::new(1060)));
        assert!(start.has_expired(60, Timestamp::new(1061)));
    }

    #[test]
    fn elapsed_since_saturates_for_future_timestamps() {
        let future = Timestamp::new(2000);
        assert_eq!(future.elapsed_since(Timestamp::new(1000)), 0);
    }

    #[test]
    fn saturating_add_does_not_wrap() {
        let ts = Timestamp::new(u64::MAX - 10);
        assert_eq!(ts.saturating_add_secs(100).as_secs(), u64::MAX);
    }
}

//! Time-remaining breakdown for a locked vault.

use serde::Serialize;

use ironclad_types::Timestamp;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_DAY: u64 = 86_400;

/// A countdown to an unlock time, broken into display units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub is_expired: bool,
}

impl TimeRemaining {
    /// The zero countdown (already expired).
    pub const EXPIRED: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        is_expired: true,
    };

    /// Render for display: `"{d}d {h}h {m}m remaining"` while pending,
    /// `"Ready to unlock!"` once expired.
    pub fn format(&self) -> String {
        if self.is_expired {
            "Ready to unlock!".to_string()
        } else {
            format!("{}d {}h {}m remaining", self.days, self.hours, self.minutes)
        }
    }
}

/// Compute the countdown from `now` to `lock_until`.
///
/// Equality counts as expired (the comparison is `>=`, not `>`); a lock
/// expiring exactly now is ready, not one-second-remaining.
pub fn time_remaining(lock_until: Timestamp, now: Timestamp) -> TimeRemaining {
    if now >= lock_until {
        return TimeRemaining::EXPIRED;
    }
    let total = lock_until.as_secs() - now.as_secs();
    TimeRemaining {
        days: total / SECS_PER_DAY,
        hours: (total % SECS_PER_DAY) / SECS_PER_HOUR,
        minutes: (total % SECS_PER_HOUR) / SECS_PER_MINUTE,
        seconds: total % SECS_PER_MINUTE,
        is_expired: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_day_two_hours_thirty_minutes() {
        let now = Timestamp::new(1_000_000);
        let lock = now.saturating_add_secs(86_400 + 2 * 3_600 + 30 * 60);
        let remaining = time_remaining(lock, now);
        assert_eq!(
            remaining,
            TimeRemaining {
                days: 1,
                hours: 2,
                minutes: 30,
                seconds: 0,
                is_expired: false,
            }
        );
        assert!(remaining.format().contains("1d 2h 30m"));
    }

    #[test]
    fn exact_equality_is_expired() {
        let now = Timestamp::new(1_000_000);
        let remaining = time_remaining(now, now);
        assert_eq!(remaining, TimeRemaining::EXPIRED);
        assert_eq!(remaining.format(), "Ready to unlock!");
    }

    #[test]
    fn past_lock_is_expired() {
        let now = Timestamp::new(1_000_000);
        assert!(time_remaining(Timestamp::new(999_990), now).is_expired);
    }

    #[test]
    fn one_hour_out() {
        let now = Timestamp::new(500);
        let remaining = time_remaining(now.saturating_add_secs(3_600), now);
        assert_eq!(remaining.days, 0);
        assert_eq!(remaining.hours, 1);
        assert_eq!(remaining.minutes, 0);
        assert!(!remaining.is_expired);
    }

    #[test]
    fn sub_minute_remainder_lands_in_seconds() {
        let now = Timestamp::new(0);
        let remaining = time_remaining(Timestamp::new(59), now);
        assert_eq!(remaining.seconds, 59);
        assert_eq!(remaining.minutes, 0);
        assert!(!remaining.is_expired);
    }
}

use proptest::prelude::*;

use ironclad_types::{SatAmount, Timestamp, VaultStatus};

proptest! {
    /// SatAmount raw value survives construction.
    #[test]
    fn sat_amount_roundtrip(sats in any::<u64>()) {
        prop_assert_eq!(SatAmount::new(sats).sats(), sats);
    }

    /// checked_add agrees with u64 overflow semantics.
    #[test]
    fn sat_amount_checked_add_matches_u64(a in any::<u64>(), b in any::<u64>()) {
        let sum = SatAmount::new(a).checked_add(SatAmount::new(b));
        prop_assert_eq!(sum.map(|s| s.sats()), a.checked_add(b));
    }

    /// Expiry is monotonic: once expired at `now`, expired at every later time.
    #[test]
    fn expiry_monotonic(
        start in 0u64..1_000_000_000,
        window in 0u64..1_000_000,
        now in 0u64..2_000_000_000,
        later_offset in 0u64..1_000_000,
    ) {
        let ts = Timestamp::new(start);
        if ts.has_expired(window, Timestamp::new(now)) {
            prop_assert!(ts.has_expired(window, Timestamp::new(now + later_offset)));
        }
    }

    /// Timestamp JSON round trip is lossless.
    #[test]
    fn timestamp_json_roundtrip(secs in any::<u64>()) {
        let ts = Timestamp::new(secs);
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, ts);
    }

    /// Any status string deserializes: known names map to their variant,
    /// everything else falls back to Unknown rather than erroring.
    #[test]
    fn vault_status_never_fails_to_deserialize(name in "[A-Za-z]{1,20}") {
        let json = format!("\"{name}\"");
        let status: VaultStatus = serde_json::from_str(&json).unwrap();
        let expected = match name.as_str() {
            "PendingDeposit" => VaultStatus::PendingDeposit,
            "ActiveLocked" => VaultStatus::ActiveLocked,
            "Unlockable" => VaultStatus::Unlockable,
            "Withdrawn" => VaultStatus::Withdrawn,
            _ => VaultStatus::Unknown,
        };
        prop_assert_eq!(status, expected);
    }
}

//! Refresh cadence selection.
//!
//! The client polls the canister on a timer; this policy decides how fast.
//! Vaults about to unlock warrant a tight cadence so the display flips
//! promptly; otherwise a slow one keeps request volume down. Re-evaluated
//! every cycle, so the cadence tightens as an expiry approaches and
//! relaxes again afterward.

use std::time::Duration;

use ironclad_types::{Timestamp, Vault};

use crate::resolve::{resolve, DisplayStatus};

/// Cadence configuration for the auto-refresh loop.
#[derive(Clone, Copy, Debug)]
pub struct RefreshPolicy {
    /// Interval when some lock expires within the near-expiry window.
    pub fast: Duration,
    /// Interval otherwise.
    pub slow: Duration,
    /// How close to expiry a lock must be to trigger the fast interval.
    pub near_expiry_window: Duration,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self {
            fast: Duration::from_secs(3),
            slow: Duration::from_secs(30),
            near_expiry_window: Duration::from_secs(60),
        }
    }
}

impl RefreshPolicy {
    /// Pick the refresh interval for the current snapshot.
    ///
    /// Scans vaults whose resolved status is still `ActiveLocked`; if any
    /// unlocks within the window (`0 < lock_until - now <= window`), the
    /// fast interval is selected. Already-expired vaults do not count —
    /// their display has flipped and there is nothing left to race.
    pub fn select_interval(&self, vaults: &[Vault], now: Timestamp) -> Duration {
        let window = self.near_expiry_window.as_secs();
        let near_expiry = vaults.iter().any(|v| {
            resolve(v, now) == DisplayStatus::ActiveLocked
                && v.lock_until.as_secs() - now.as_secs() <= window
        });
        if near_expiry {
            self.fast
        } else {
            self.slow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironclad_types::{Principal, SatAmount, VaultId, VaultStatus};

    fn vault(id: u64, status: VaultStatus, lock_until: u64) -> Vault {
        Vault {
            id: VaultId::new(id),
            owner: Principal::parse("owner-1").unwrap(),
            status,
            balance: SatAmount::new(50_000),
            expected_deposit: SatAmount::new(50_000),
            lock_until: Timestamp::new(lock_until),
            beneficiary: None,
            last_keep_alive: Timestamp::new(0),
            inheritance_timeout_secs: 180 * 86_400,
            btc_address: "bc1qexample".to_string(),
            deposit_txid: None,
            withdraw_txid: None,
            ckbtc_subaccount: None,
        }
    }

    #[test]
    fn expiry_45_seconds_away_selects_fast() {
        let policy = RefreshPolicy::default();
        let now = Timestamp::new(10_000);
        let vaults = vec![vault(1, VaultStatus::ActiveLocked, 10_045)];
        assert_eq!(
            policy.select_interval(&vaults, now),
            Duration::from_millis(3_000)
        );
    }

    #[test]
    fn expiry_five_minutes_away_selects_slow() {
        let policy = RefreshPolicy::default();
        let now = Timestamp::new(10_000);
        let vaults = vec![vault(1, VaultStatus::ActiveLocked, 10_300)];
        assert_eq!(
            policy.select_interval(&vaults, now),
            Duration::from_millis(30_000)
        );
    }

    #[test]
    fn already_expired_lock_does_not_trigger_fast() {
        let policy = RefreshPolicy::default();
        let now = Timestamp::new(10_000);
        // resolves to Unlockable, so the race is over
        let vaults = vec![vault(1, VaultStatus::ActiveLocked, 9_990)];
        assert_eq!(policy.select_interval(&vaults, now), policy.slow);
    }

    #[test]
    fn non_locked_vaults_are_ignored() {
        let policy = RefreshPolicy::default();
        let now = Timestamp::new(10_000);
        let vaults = vec![
            vault(1, VaultStatus::Unlockable, 10_030),
            vault(2, VaultStatus::PendingDeposit, 10_030),
            vault(3, VaultStatus::Withdrawn, 10_030),
        ];
        assert_eq!(policy.select_interval(&vaults, now), policy.slow);
    }

    #[test]
    fn one_near_expiry_vault_among_many_selects_fast() {
        let policy = RefreshPolicy::default();
        let now = Timestamp::new(10_000);
        let vaults = vec![
            vault(1, VaultStatus::ActiveLocked, 20_000),
            vault(2, VaultStatus::ActiveLocked, 10_010),
        ];
        assert_eq!(policy.select_interval(&vaults, now), policy.fast);
    }

    #[test]
    fn empty_snapshot_selects_slow() {
        let policy = RefreshPolicy::default();
        assert_eq!(policy.select_interval(&[], Timestamp::new(0)), policy.slow);
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let policy = RefreshPolicy::default();
        let now = Timestamp::new(10_000);
        assert_eq!(
            policy.select_interval(&[vault(1, VaultStatus::ActiveLocked, 10_060)], now),
            policy.fast
        );
        assert_eq!(
            policy.select_interval(&[vault(1, VaultStatus::ActiveLocked, 10_061)], now),
            policy.slow
        );
    }
}

//! Dead-man-switch countdown.
//!
//! Inheritance is enforced entirely by the canister: after the owner has
//! been silent for the configured inactivity window, the beneficiary may
//! claim. The client only renders how far along that window is. Same
//! advisory caveat as the unlock override — `is_claimable` here does not
//! mean a claim call will succeed.

use serde::Serialize;

use ironclad_types::{Timestamp, Vault};

use crate::countdown::{time_remaining, TimeRemaining};

/// Display view of a vault's inheritance window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct InheritanceView {
    /// When the beneficiary becomes eligible to claim.
    pub deadline: Timestamp,
    pub remaining: TimeRemaining,
    pub is_claimable: bool,
}

/// The moment the inactivity window elapses: `last_keep_alive + timeout`.
pub fn inheritance_deadline(vault: &Vault) -> Timestamp {
    vault
        .last_keep_alive
        .saturating_add_secs(vault.inheritance_timeout_secs)
}

/// Countdown to the inheritance deadline, or `None` when the vault has no
/// beneficiary configured.
pub fn inheritance_countdown(vault: &Vault, now: Timestamp) -> Option<InheritanceView> {
    vault.beneficiary.as_ref()?;
    let deadline = inheritance_deadline(vault);
    Some(InheritanceView {
        deadline,
        remaining: time_remaining(deadline, now),
        is_claimable: now >= deadline,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironclad_types::{Principal, SatAmount, VaultId, VaultStatus};

    fn vault(beneficiary: Option<&str>, last_keep_alive: u64, timeout_secs: u64) -> Vault {
        Vault {
            id: VaultId::new(1),
            owner: Principal::parse("owner-1").unwrap(),
            status: VaultStatus::ActiveLocked,
            balance: SatAmount::new(100_000),
            expected_deposit: SatAmount::new(100_000),
            lock_until: Timestamp::new(u64::MAX),
            beneficiary: beneficiary.map(|b| Principal::parse(b).unwrap()),
            last_keep_alive: Timestamp::new(last_keep_alive),
            inheritance_timeout_secs: timeout_secs,
            btc_address: "bc1qexample".to_string(),
            deposit_txid: None,
            withdraw_txid: None,
            ckbtc_subaccount: None,
        }
    }

    #[test]
    fn no_beneficiary_means_no_countdown() {
        let v = vault(None, 1_000, 86_400);
        assert_eq!(inheritance_countdown(&v, Timestamp::new(2_000)), None);
    }

    #[test]
    fn deadline_is_keep_alive_plus_timeout() {
        let v = vault(Some("heir-1"), 1_000, 86_400);
        assert_eq!(inheritance_deadline(&v), Timestamp::new(87_400));
    }

    #[test]
    fn claimable_exactly_at_deadline() {
        let v = vault(Some("heir-1"), 1_000, 86_400);
        let before = inheritance_countdown(&v, Timestamp::new(87_399)).unwrap();
        assert!(!before.is_claimable);
        assert!(!before.remaining.is_expired);

        let at = inheritance_countdown(&v, Timestamp::new(87_400)).unwrap();
        assert!(at.is_claimable);
        assert!(at.remaining.is_expired);
    }

    #[test]
    fn countdown_reflects_remaining_window() {
        let v = vault(Some("heir-1"), 0, 2 * 86_400);
        let view = inheritance_countdown(&v, Timestamp::new(86_400)).unwrap();
        assert_eq!(view.remaining.days, 1);
        assert!(!view.is_claimable);
    }
}

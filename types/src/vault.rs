//! Vault, reinvest plan, and marketplace listing records.

use serde::{Deserialize, Serialize};

use crate::amount::SatAmount;
use crate::id::{ListingId, VaultId};
use crate::principal::Principal;
use crate::status::{ListingStatus, ReinvestStatus, VaultStatus};
use crate::time::Timestamp;

/// A vault snapshot as reported by the canister at fetch time.
///
/// Immutable once fetched; all lifecycle transitions happen server-side
/// and are observed by re-fetching. The address and txid fields are opaque
/// to the client — display and copy only, never parsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vault {
    pub id: VaultId,
    pub owner: Principal,
    pub status: VaultStatus,
    pub balance: SatAmount,
    pub expected_deposit: SatAmount,
    /// Absolute unlock time. Only meaningful while the vault is locked;
    /// the canister may leave a stale value after the status moves on.
    pub lock_until: Timestamp,
    /// Designated heir for the dead-man-switch, if configured.
    #[serde(default)]
    pub beneficiary: Option<Principal>,
    /// Last liveness proof from the owner.
    pub last_keep_alive: Timestamp,
    /// Inactivity window after which the beneficiary may claim.
    pub inheritance_timeout_secs: u64,
    /// Deposit address on the Bitcoin network. Opaque.
    pub btc_address: String,
    #[serde(default)]
    pub deposit_txid: Option<String>,
    #[serde(default)]
    pub withdraw_txid: Option<String>,
    /// ckBTC ledger subaccount bytes. Opaque; hex for display.
    #[serde(default)]
    pub ckbtc_subaccount: Option<Vec<u8>>,
}

impl Vault {
    /// Hex rendering of the ckBTC subaccount, if present.
    pub fn ckbtc_subaccount_hex(&self) -> Option<String> {
        self.ckbtc_subaccount.as_ref().map(hex::encode)
    }
}

/// An auto-reinvest plan attached to a vault.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReinvestPlan {
    pub vault_id: VaultId,
    pub status: ReinvestStatus,
    /// Length of each re-lock period the plan applies.
    pub lock_duration_secs: u64,
    /// How many times the plan has fired.
    pub executions: u32,
    /// Last execution failure reported by the canister, if any.
    #[serde(default)]
    pub last_error: Option<String>,
}

/// A marketplace listing offering an `ActiveLocked` vault for sale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub vault_id: VaultId,
    pub seller: Principal,
    pub price: SatAmount,
    pub status: ListingStatus,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vault() -> Vault {
        Vault {
            id: VaultId::new(7),
            owner: Principal::parse("owner-1").unwrap(),
            status: VaultStatus::ActiveLocked,
            balance: SatAmount::new(250_000),
            expected_deposit: SatAmount::new(250_000),
            lock_until: Timestamp::new(1_900_000_000),
            beneficiary: None,
            last_keep_alive: Timestamp::new(1_800_000_000),
            inheritance_timeout_secs: 180 * 86_400,
            btc_address: "bc1qexample".to_string(),
            deposit_txid: None,
            withdraw_txid: None,
            ckbtc_subaccount: Some(vec![0xde, 0xad, 0xbe, 0xef]),
        }
    }

    #[test]
    fn subaccount_renders_as_hex() {
        assert_eq!(
            sample_vault().ckbtc_subaccount_hex().as_deref(),
            Some("deadbeef")
        );
    }

    #[test]
    fn vault_deserializes_without_optional_fields() {
        let json = r#"{
            "id": 1,
            "owner": "owner-1",
            "status": "PendingDeposit",
            "balance": 0,
            "expected_deposit": 50000,
            "lock_until": 1900000000,
            "last_keep_alive": 1800000000,
            "inheritance_timeout_secs": 15552000,
            "btc_address": "bc1qexample"
        }"#;
        let vault: Vault = serde_json::from_str(json).unwrap();
        assert_eq!(vault.status, VaultStatus::PendingDeposit);
        assert!(vault.beneficiary.is_none());
        assert!(vault.ckbtc_subaccount.is_none());
    }
}

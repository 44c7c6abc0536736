//! Client error taxonomy.
//!
//! Three layers: the network failed (`Transport`), the response made no
//! sense (`Protocol`), or the canister understood us and said no
//! (`Rejected`). Rejections carry the backend's typed reason; codes this
//! client does not recognize land in the `Backend` catch-all instead of
//! failing to decode.

use serde::Deserialize;
use thiserror::Error;

use ironclad_types::{SatAmount, Timestamp};

#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or HTTP-level failure; nothing reached the canister logic.
    #[error("transport error: {0}")]
    Transport(String),

    /// The gateway answered with something this client cannot interpret.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The canister rejected the operation.
    #[error("rejected: {0}")]
    Rejected(Rejection),
}

/// A typed rejection from the canister.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("vault not found")]
    VaultNotFound,

    #[error("caller is not the vault owner")]
    NotOwner,

    /// The canister's clock says the lock has not elapsed. Expected after
    /// a client-side "ready" display when clocks skew; surfaced as a
    /// normal failure, never swallowed.
    #[error("vault still locked until {lock_until}")]
    StillLocked { lock_until: Timestamp },

    #[error("vault is not withdrawable")]
    NotWithdrawable,

    #[error("insufficient funds: {available} available, {requested} requested")]
    InsufficientFunds {
        available: SatAmount,
        requested: SatAmount,
    },

    #[error("deposit has not arrived yet")]
    DepositPending,

    #[error("no reinvest plan for this vault")]
    PlanNotFound,

    #[error("listing not found")]
    ListingNotFound,

    #[error("listing is no longer open")]
    ListingClosed,

    /// Any error code this client does not know.
    #[error("backend error {code}: {message}")]
    Backend { code: String, message: String },
}

/// Error body as it appears on the wire.
#[derive(Debug, Deserialize)]
pub(crate) struct WireError {
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub lock_until: Option<Timestamp>,
    #[serde(default)]
    pub available: Option<SatAmount>,
    #[serde(default)]
    pub requested: Option<SatAmount>,
}

impl From<WireError> for Rejection {
    fn from(wire: WireError) -> Self {
        match wire.code.as_str() {
            "vault_not_found" => Self::VaultNotFound,
            "not_owner" => Self::NotOwner,
            "still_locked" => Self::StillLocked {
                lock_until: wire.lock_until.unwrap_or(Timestamp::EPOCH),
            },
            "not_withdrawable" => Self::NotWithdrawable,
            "insufficient_funds" => Self::InsufficientFunds {
                available: wire.available.unwrap_or(SatAmount::ZERO),
                requested: wire.requested.unwrap_or(SatAmount::ZERO),
            },
            "deposit_pending" => Self::DepositPending,
            "plan_not_found" => Self::PlanNotFound,
            "listing_not_found" => Self::ListingNotFound,
            "listing_closed" => Self::ListingClosed,
            _ => Self::Backend {
                code: wire.code,
                message: wire.message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Rejection {
        let wire: WireError = serde_json::from_str(json).unwrap();
        wire.into()
    }

    #[test]
    fn known_codes_map_to_typed_variants() {
        assert_eq!(decode(r#"{"code":"vault_not_found"}"#), Rejection::VaultNotFound);
        assert_eq!(decode(r#"{"code":"not_owner"}"#), Rejection::NotOwner);
        assert_eq!(decode(r#"{"code":"deposit_pending"}"#), Rejection::DepositPending);
        assert_eq!(decode(r#"{"code":"listing_closed"}"#), Rejection::ListingClosed);
    }

    #[test]
    fn still_locked_carries_lock_until() {
        let rejection = decode(r#"{"code":"still_locked","lock_until":1900000000}"#);
        assert_eq!(
            rejection,
            Rejection::StillLocked {
                lock_until: Timestamp::new(1_900_000_000)
            }
        );
    }

    #[test]
    fn insufficient_funds_carries_amounts() {
        let rejection =
            decode(r#"{"code":"insufficient_funds","available":1000,"requested":5000}"#);
        assert_eq!(
            rejection,
            Rejection::InsufficientFunds {
                available: SatAmount::new(1_000),
                requested: SatAmount::new(5_000),
            }
        );
    }

    #[test]
    fn unknown_code_falls_back_to_backend() {
        let rejection = decode(r#"{"code":"quota_exceeded","message":"too many vaults"}"#);
        assert_eq!(
            rejection,
            Rejection::Backend {
                code: "quota_exceeded".to_string(),
                message: "too many vaults".to_string(),
            }
        );
    }
}

//! Server-authoritative state enums.
//!
//! Every enum carries a `#[serde(other)]` catch-all so a status value this
//! client has never seen deserializes to `Unknown` instead of failing the
//! whole fetch. The canister may add variants before the client learns
//! about them.

use serde::{Deserialize, Serialize};

/// The lifecycle state of a vault, as reported by the canister.
///
/// Lifecycle: `PendingDeposit → ActiveLocked → Unlockable → Withdrawn`.
/// A marketplace sale transfers ownership without altering this sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VaultStatus {
    /// Created; waiting for the expected deposit to arrive.
    PendingDeposit,
    /// Funded and time-locked.
    ActiveLocked,
    /// Lock satisfied; owner may withdraw.
    Unlockable,
    /// Funds withdrawn; terminal.
    Withdrawn,
    /// Unrecognized wire value.
    #[serde(other)]
    Unknown,
}

/// The state of a vault's auto-reinvest plan. Governed entirely
/// server-side; the client only displays it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReinvestStatus {
    Active,
    Paused,
    Error,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl ReinvestStatus {
    /// Whether the plan will still fire on the next unlock.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// The state of a marketplace listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    Open,
    Sold,
    Cancelled,
    #[serde(other)]
    Unknown,
}

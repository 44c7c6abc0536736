//! Display-status derivation.
//!
//! The canister reports four authoritative states. For display purposes the
//! client adds exactly one override: an `ActiveLocked` vault whose
//! `lock_until` has passed is shown as `Unlockable` before the canister has
//! recorded the transition. The override is advisory — the authoritative
//! unlock is still an explicit call that the canister re-validates with its
//! own clock.

use serde::Serialize;

use ironclad_types::{Timestamp, Vault, VaultStatus};

/// The status a vault is displayed with. Derived, never persisted;
/// computed fresh from `(server status, lock_until, now)` on every read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DisplayStatus {
    PendingDeposit,
    ActiveLocked,
    Unlockable,
    Withdrawn,
    Unknown,
}

/// Presentation-neutral styling bucket for a display status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum StatusClass {
    Pending,
    Locked,
    Ready,
    Settled,
    Unknown,
}

impl DisplayStatus {
    /// Human-readable label. Total over all five statuses.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PendingDeposit => "Pending Deposit",
            Self::ActiveLocked => "Locked",
            Self::Unlockable => "Ready to Unlock",
            Self::Withdrawn => "Withdrawn",
            Self::Unknown => "Unknown Status",
        }
    }

    /// Styling classification. Total over all five statuses.
    pub fn class(&self) -> StatusClass {
        match self {
            Self::PendingDeposit => StatusClass::Pending,
            Self::ActiveLocked => StatusClass::Locked,
            Self::Unlockable => StatusClass::Ready,
            Self::Withdrawn => StatusClass::Settled,
            Self::Unknown => StatusClass::Unknown,
        }
    }
}

impl StatusClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Locked => "locked",
            Self::Ready => "ready",
            Self::Settled => "settled",
            Self::Unknown => "unknown",
        }
    }
}

/// Derive the display status for a vault snapshot at `now`.
///
/// Server status passes through unchanged for `PendingDeposit`,
/// `Unlockable`, and `Withdrawn` — even when `lock_until` looks
/// inconsistent, the canister's word wins. Only `ActiveLocked` is subject
/// to the time-based override, and equality counts as elapsed (`>=`).
pub fn resolve(vault: &Vault, now: Timestamp) -> DisplayStatus {
    match vault.status {
        VaultStatus::Withdrawn => DisplayStatus::Withdrawn,
        VaultStatus::PendingDeposit => DisplayStatus::PendingDeposit,
        VaultStatus::Unlockable => DisplayStatus::Unlockable,
        VaultStatus::ActiveLocked => {
            if now >= vault.lock_until {
                DisplayStatus::Unlockable
            } else {
                DisplayStatus::ActiveLocked
            }
        }
        VaultStatus::Unknown => DisplayStatus::Unknown,
    }
}

//! Core data model for the Ironclad Vault client.
//!
//! This crate defines the types shared across the client toolkit: vault
//! snapshots, server status enums, amounts, timestamps, and identities.
//! Every record mirrors what the vault canister reports — the canister is
//! the sole source of truth, and a record is an immutable snapshot of its
//! state at fetch time. Derived state (display status, countdowns) lives in
//! `ironclad-status`, not here.

pub mod amount;
pub mod id;
pub mod network;
pub mod principal;
pub mod status;
pub mod time;
pub mod vault;

pub use amount::SatAmount;
pub use id::{ListingId, VaultId};
pub use network::NetworkId;
pub use principal::{ParsePrincipalError, Principal};
pub use status::{ListingStatus, ReinvestStatus, VaultStatus};
pub use time::Timestamp;
pub use vault::{Listing, ReinvestPlan, Vault};

//! Typed RPC client for the Ironclad Vault canister gateway.
//!
//! The canister owns all vault state; this crate is the only place the
//! client toolkit touches the network. One method per canister operation,
//! each returning domain types from `ironclad-types` or a typed
//! [`ClientError`]. The [`Session`] ties a principal and network together
//! with a client instance, replacing the ambient globals the original
//! dashboard kept.

pub mod client;
pub mod error;
pub mod session;

pub use client::{CanisterClient, CreateVaultParams, WithdrawReceipt};
pub use error::{ClientError, Rejection};
pub use session::Session;

//! Network identifier.

use serde::{Deserialize, Serialize};

/// Identifies which vault-canister deployment the client talks to.
///
/// This is the network-mode toggle: switching it rebuilds the client
/// against a different gateway.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// The production deployment (real ckBTC).
    Mainnet,
    /// The public test deployment.
    Testnet,
    /// A local replica for development.
    Local,
}

impl NetworkId {
    /// Default gateway URL for this network's canister.
    pub fn default_gateway_url(&self) -> &'static str {
        match self {
            Self::Mainnet => "https://gateway.ironcladvault.app/rpc",
            Self::Testnet => "https://testnet.ironcladvault.app/rpc",
            Self::Local => "http://127.0.0.1:4943/rpc",
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Local => "local",
        }
    }
}

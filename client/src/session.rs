//! Session state container.
//!
//! The original dashboard kept the connected principal and network mode in
//! ambient globals. Here they live in one explicit object with read
//! accessors and a defined rebuild path for network switching. The session
//! owns no persistent state; teardown is drop.

use ironclad_types::{NetworkId, Principal};

use crate::client::CanisterClient;
use crate::error::ClientError;

/// An authenticated client session: who is talking, to which network,
/// through which client.
pub struct Session {
    principal: Principal,
    network: NetworkId,
    gateway_url: String,
    client: CanisterClient,
}

impl Session {
    /// Connect to a network's default gateway.
    pub fn connect(network: NetworkId, principal: Principal) -> Result<Self, ClientError> {
        Self::connect_with_gateway(network.default_gateway_url(), network, principal)
    }

    /// Connect with an explicit gateway URL override.
    pub fn connect_with_gateway(
        gateway_url: impl Into<String>,
        network: NetworkId,
        principal: Principal,
    ) -> Result<Self, ClientError> {
        let gateway_url = gateway_url.into();
        let client = CanisterClient::new(gateway_url.clone())?;
        tracing::info!(network = network.as_str(), gateway = %gateway_url, "session connected");
        Ok(Self {
            principal,
            network,
            gateway_url,
            client,
        })
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn network(&self) -> NetworkId {
        self.network
    }

    pub fn gateway_url(&self) -> &str {
        &self.gateway_url
    }

    pub fn client(&self) -> &CanisterClient {
        &self.client
    }

    /// Switch to a different network, rebuilding the client against that
    /// network's default gateway. The principal carries over.
    pub fn switch_network(&mut self, network: NetworkId) -> Result<(), ClientError> {
        let gateway_url = network.default_gateway_url().to_string();
        self.client = CanisterClient::new(gateway_url.clone())?;
        self.network = network;
        self.gateway_url = gateway_url;
        tracing::info!(network = network.as_str(), "session switched network");
        Ok(())
    }
}

//! The fetch seam.
//!
//! The watcher never talks to the network directly; it pulls snapshots
//! through [`VaultSource`], so tests can script responses without an HTTP
//! server behind them.

use std::future::Future;

use ironclad_client::{CanisterClient, ClientError, Session};
use ironclad_types::{Principal, Vault};

/// Anything that can produce a fresh vault snapshot.
pub trait VaultSource: Send + Sync + 'static {
    fn fetch_vaults(&self) -> impl Future<Output = Result<Vec<Vault>, ClientError>> + Send;
}

/// A [`VaultSource`] scoped to a session's principal.
#[derive(Clone)]
pub struct SessionVaults {
    client: CanisterClient,
    owner: Principal,
}

impl SessionVaults {
    pub fn new(session: &Session) -> Self {
        Self {
            client: session.client().clone(),
            owner: session.principal().clone(),
        }
    }
}

impl VaultSource for SessionVaults {
    async fn fetch_vaults(&self) -> Result<Vec<Vault>, ClientError> {
        self.client.list_vaults(&self.owner).await
    }
}

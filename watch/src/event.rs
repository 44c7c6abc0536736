//! Events emitted by the watcher for consumers to present.

use ironclad_status::DisplayStatus;
use ironclad_types::{Vault, VaultId};

/// What the watcher observed in one refresh cycle.
#[derive(Clone, Debug)]
pub enum WatchEvent {
    /// A refresh succeeded; the full current snapshot.
    Snapshot { vaults: Vec<Vault> },
    /// A vault's display status moved between consecutive snapshots.
    StatusChanged {
        vault_id: VaultId,
        previous: DisplayStatus,
        current: DisplayStatus,
    },
    /// A refresh failed; the watcher stays up and retries on the slow
    /// interval.
    RefreshFailed {
        consecutive_failures: u32,
        message: String,
    },
}

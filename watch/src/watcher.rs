//! The repeating refresh task.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use ironclad_status::{resolve, DisplayStatus, RefreshPolicy};
use ironclad_types::{Timestamp, VaultId};

use crate::event::WatchEvent;
use crate::source::VaultSource;

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Send an event unless shutdown arrives first. Returns `false` when the
/// loop should exit (shutdown signalled or the consumer went away).
async fn send_or_shutdown(
    events_tx: &mpsc::Sender<WatchEvent>,
    shutdown_rx: &mut broadcast::Receiver<()>,
    event: WatchEvent,
) -> bool {
    tokio::select! {
        biased;
        _ = shutdown_rx.recv() => false,
        sent = events_tx.send(event) => sent.is_ok(),
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WatchError {
    #[error("watcher already started")]
    AlreadyStarted,
    #[error("watcher not started")]
    NotStarted,
}

/// A cancellable repeating fetch task over a [`VaultSource`].
///
/// One task per watcher. Each cycle awaits the fetch inline before
/// re-arming the sleep, so fetches never overlap. `stop` broadcasts
/// shutdown, awaits the task, and bumps a generation counter so a fetch
/// completing after stop is discarded rather than emitted.
pub struct VaultWatcher<S: VaultSource> {
    source: Arc<S>,
    policy: RefreshPolicy,
    shutdown_tx: broadcast::Sender<()>,
    generation: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl<S: VaultSource> VaultWatcher<S> {
    pub fn new(source: S, policy: RefreshPolicy) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            source: Arc::new(source),
            policy,
            shutdown_tx,
            generation: Arc::new(AtomicU64::new(0)),
            handle: None,
        }
    }

    /// Spawn the refresh loop. Returns the event stream.
    pub fn start(&mut self) -> Result<mpsc::Receiver<WatchEvent>, WatchError> {
        if self.handle.is_some() {
            return Err(WatchError::AlreadyStarted);
        }

        let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let source = Arc::clone(&self.source);
        let policy = self.policy;
        let generation = Arc::clone(&self.generation);
        let start_generation = generation.load(Ordering::SeqCst);
        let mut shutdown_rx = self.shutdown_tx.subscribe();

        let handle = tokio::spawn(async move {
            let mut previous: HashMap<VaultId, DisplayStatus> = HashMap::new();
            let mut consecutive_failures = 0u32;

            'run: loop {
                // Stay responsive to shutdown while the fetch is in flight.
                let fetched = tokio::select! {
                    biased;
                    _ = shutdown_rx.recv() => break 'run,
                    result = source.fetch_vaults() => result,
                };

                if generation.load(Ordering::SeqCst) != start_generation {
                    // stopped while this fetch was in flight; result is stale
                    break 'run;
                }

                let interval = match fetched {
                    Ok(vaults) => {
                        consecutive_failures = 0;
                        let now = Timestamp::now();

                        let mut current: HashMap<VaultId, DisplayStatus> = HashMap::new();
                        let mut changes = Vec::new();
                        for vault in &vaults {
                            let status = resolve(vault, now);
                            if let Some(&prev) = previous.get(&vault.id) {
                                if prev != status {
                                    changes.push(WatchEvent::StatusChanged {
                                        vault_id: vault.id,
                                        previous: prev,
                                        current: status,
                                    });
                                }
                            }
                            current.insert(vault.id, status);
                        }
                        previous = current;

                        let interval = policy.select_interval(&vaults, now);
                        let snapshot = WatchEvent::Snapshot { vaults };
                        if !send_or_shutdown(&events_tx, &mut shutdown_rx, snapshot).await {
                            break 'run;
                        }
                        for change in changes {
                            if !send_or_shutdown(&events_tx, &mut shutdown_rx, change).await {
                                break 'run;
                            }
                        }
                        interval
                    }
                    Err(e) => {
                        consecutive_failures += 1;
                        tracing::warn!(consecutive_failures, "vault refresh failed: {e}");
                        let event = WatchEvent::RefreshFailed {
                            consecutive_failures,
                            message: e.to_string(),
                        };
                        if !send_or_shutdown(&events_tx, &mut shutdown_rx, event).await {
                            break 'run;
                        }
                        policy.slow
                    }
                };

                tokio::select! {
                    biased;
                    _ = shutdown_rx.recv() => break 'run,
                    _ = tokio::time::sleep(interval) => {}
                }
            }

            tracing::debug!("vault watcher stopped");
        });

        self.handle = Some(handle);
        Ok(events_rx)
    }

    /// Stop the loop and wait for the task to finish.
    pub async fn stop(&mut self) -> Result<(), WatchError> {
        let handle = self.handle.take().ok_or(WatchError::NotStarted)?;
        self.generation.fetch_add(1, Ordering::SeqCst);
        let _ = self.shutdown_tx.send(());
        let _ = handle.await;
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

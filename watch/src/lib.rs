//! Auto-refresh scheduler.
//!
//! A [`VaultWatcher`] is one cancellable repeating task: fetch the vault
//! snapshot, resolve display statuses, diff against the previous cycle,
//! emit events, then sleep for an interval recomputed from the data. It
//! emits plain [`WatchEvent`]s on a channel and never renders anything —
//! presentation is the consumer's problem.

pub mod event;
pub mod source;
pub mod watcher;

pub use event::WatchEvent;
pub use source::{SessionVaults, VaultSource};
pub use watcher::{VaultWatcher, WatchError};

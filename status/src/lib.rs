//! Pure derivation layer over vault snapshots.
//!
//! Everything in this crate is a deterministic function of a fetched vault
//! record and an explicit `now` — no clocks read implicitly, no I/O, no
//! failure paths. The canister remains the sole authority on vault state;
//! the derivations here exist so every screen and command line renders the
//! same answer from the same snapshot.

pub mod countdown;
pub mod inheritance;
pub mod refresh;
pub mod resolve;

pub use countdown::{time_remaining, TimeRemaining};
pub use inheritance::{inheritance_countdown, inheritance_deadline, InheritanceView};
pub use refresh::RefreshPolicy;
pub use resolve::{resolve, DisplayStatus, StatusClass};

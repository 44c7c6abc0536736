//! Shared helpers for the Ironclad Vault client.

pub mod logging;
pub mod time;

pub use logging::init_tracing_with_default;
pub use time::format_duration;

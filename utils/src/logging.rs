//! Structured logging initialization via `tracing`.

/// Initialize the tracing subscriber, falling back to the given filter
/// when the `RUST_LOG` environment variable is unset.
pub fn init_tracing_with_default(default_filter: &str) {
    use tracing_subscriber::EnvFilter;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

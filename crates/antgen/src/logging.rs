//! Diagnostic tracing setup.
//!
//! The library crates only emit `tracing` events. Binaries and tests that
//! want to see them call [`init`] once.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Compact output. Calling it twice returns without replacing the first
/// subscriber.
///
/// ```bash
/// RUST_LOG=antgen=debug,antgen_tour=trace my-tool
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

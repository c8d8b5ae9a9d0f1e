//! Diagnostics for the `climb` binary.
//!
//! The tables and trails of this crate emit `tracing` events: table growth and level collapses at `debug`, every step of a walk at `trace`.
//! Nothing is printed unless a subscriber is installed with [`init`].

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads the `RUST_LOG` env var, defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=climb_sol=trace climb walk trail.json --personality lazy
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

//! Log subscriber for the receipt binary.
//!
//! Domain crates only emit `tracing` events (line added, line merged,
//! addition rejected); this module decides where they go.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable. Invoice line events
/// are logged at `debug`, so they stay hidden unless asked for.
pub const DEFAULT_FILTER: &str = "info";

/// Install the JSON subscriber, filtered by `RUST_LOG`.
///
/// A second call finds a subscriber already set and leaves it alone.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // stdout carries the receipt; logs must not interleave with it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_writer(std::io::stderr)
        .try_init();
}

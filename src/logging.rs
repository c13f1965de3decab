//! Diagnostic logging setup
//!
//! Log events go to stderr so they never mix with command output. The level
//! comes from `RUST_LOG` when set, otherwise from the `--verbose` flag.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter without `--verbose`
const DEFAULT_FILTER: &str = "repogen=warn";

/// Filter with `--verbose`
const VERBOSE_FILTER: &str = "repogen=debug";

/// Filter directive for the given verbosity, ignoring `RUST_LOG`
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER }
}

/// Install the global subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

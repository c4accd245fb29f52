//! Tracing subscriber setup for hosts that have none.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::diagnostics::LOG_TAG;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `debug` argument sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO for the probe's channel
///
/// Returns `false` if a global subscriber was already installed, in which
/// case records go to that one.
pub fn init_tracing(debug: bool) -> bool {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(default_filter(debug))
        .try_init()
        .is_ok()
}

fn default_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new(format!("{}=debug", LOG_TAG))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", LOG_TAG)))
    }
}

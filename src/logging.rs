//! Logging setup shared by the binaries.
//!
//! Library crates only emit `tracing` events; installing a subscriber is left
//! to the process entry point. Output always goes to stderr so tool and hook
//! results printed on stdout stay machine-readable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::EnvConfig;

/// Installs the global subscriber described by `config`.
///
/// Returns `false` when a subscriber was already installed (tests, embedding hosts).
pub fn init(config: &EnvConfig) -> bool {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
    };

    result.is_ok()
}

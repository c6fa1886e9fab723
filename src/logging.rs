//! Tracing initialization and configuration.
//!
//! The library only emits `tracing` events; whoever embeds it decides where they
//! go. The CLI calls [`init_tracing`], tests install nothing.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "NEXUS_LOG";

const DEFAULT_FILTER: &str = "nexus_core=info,nexus_ops=info";

static INIT: Once = Once::new();

/// Initialize the Nexus tracing/logging system.
///
/// Reads `NEXUS_LOG` for per-module log levels, e.g.
/// `NEXUS_LOG=nexus_core::project=debug,nexus_core::syntax=warn`.
///
/// Falls back to `info` for this crate if `NEXUS_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}

//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "COSTLENS_LOG";

/// Filter used when `COSTLENS_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "costlens=info";

/// Build the filter from `COSTLENS_LOG`, falling back to [`DEFAULT_FILTER`]
/// when the variable is unset or does not parse.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the costlens tracing/logging system.
///
/// Reads `COSTLENS_LOG` for per-crate log levels.
/// Format: `COSTLENS_LOG=costlens_analytics=debug,costlens_core=warn`
///
/// Falls back to `costlens=info` if `COSTLENS_LOG` is not set or is invalid.
///
/// Idempotent. If another subscriber was already installed globally, that
/// one stays in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = env_filter();

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

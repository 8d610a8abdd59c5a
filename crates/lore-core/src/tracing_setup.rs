//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Default filter when `LORE_LOG` is absent or invalid.
pub const DEFAULT_FILTER: &str = "lore=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("LORE_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize human-readable logging.
///
/// Reads `LORE_LOG` for per-target levels, e.g.
/// `LORE_LOG=lore_learning=debug,lore_storage=warn`.
/// Idempotent: later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(env_filter())
            .try_init();
    });
}

/// Initialize structured JSON logging on stderr. Idempotent.
pub fn init_tracing_json() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_writer(std::io::stderr),
            )
            .with(env_filter())
            .try_init();
    });
}

//! Logging Infrastructure
//!
//! Structured logging setup via tracing-subscriber. The level comes from
//! `LOG_LEVEL` (or `RUST_LOG` for per-target filters), defaulting to info.

use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}

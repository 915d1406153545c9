//! Structured logging configuration using the tracing crate
//!
//! The library only emits `tracing` events; installing a subscriber is up
//! to the application. The `termio` binary calls [`init`] at startup.
//!
//! Example usage:
//! ```bash
//! # Show why a prompt kept asking
//! RUST_LOG=termio=debug termio confirm "Proceed?"
//! ```
//!
//! Typed answers and passwords are never part of any event.

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LEVEL: &str = "warn";

/// Pick the filter: `RUST_LOG` first, then `configured`, then `warn`
pub fn filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(DEFAULT_LEVEL)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install a compact stderr subscriber
///
/// Logs go to stderr so they never mix with answers printed on stdout.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(configured: Option<&str>) {
    let _ = fmt()
        .with_env_filter(filter(configured))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

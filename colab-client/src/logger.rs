//! Logging Infrastructure
//!
//! Console logging for binaries and demos built on this crate. The library
//! itself only emits `tracing` events; nothing is printed unless a
//! subscriber is installed.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize console logging
///
/// # Arguments
/// * `level` - Fallback filter when `RUST_LOG` is unset (e.g., "info", "colab_client=debug")
/// * `json_format` - JSON lines instead of human-readable output
///
/// Fails if a global subscriber is already installed.
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json_format {
        let console_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true);
        subscriber.with(console_layer).try_init()?;
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        subscriber.with(console_layer).try_init()?;
    }

    Ok(())
}

//! Diagnostic output for the helper binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! binaries. Output goes to stderr so stdout stays machine-readable JSON.

use anyhow::{Context, Result};
use std::io::IsTerminal;
pub use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Build the filter: `RUST_LOG` wins, `default_level` applies otherwise.
pub fn env_filter(default_level: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy()
}

/// Install the global stderr subscriber. Fails if one is already set.
pub fn init_logging(default_level: LevelFilter) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(
            layer()
                .compact()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("installing tracing subscriber")
}

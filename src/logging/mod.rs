//! Diagnostic logging setup.
//!
//! Installs a `tracing` fmt subscriber on stderr so stdout stays free for the
//! reply text. The level comes from `[logging] level` in the config file.

use anyhow::Result;
use tracing::Level;

use crate::config::LoggingConfig;

/// Parse a level name, falling back to `WARN` for anything unrecognized.
pub fn parse_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::WARN)
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(parse_level(&config.level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}

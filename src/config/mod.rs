pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{
    AppConfig, EmptySourcePolicy, EngineConfig, LoggingConfig, ProfileConfig,
    DEFAULT_RANDOM_LENGTH, MAX_NAME_LENGTH,
};

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("crabname")
        .join("config.toml")
}

/// Load the config from the default location, or defaults if there is none.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

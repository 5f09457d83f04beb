//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the tool works without a config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::text::Segmentation;

/// Hard cap, in units, on every produced name.
pub const MAX_NAME_LENGTH: usize = 50;

/// Length of a generated name when no usable length is given.
pub const DEFAULT_RANDOM_LENGTH: usize = 4;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// What to do when Shuffle or Sort has nothing to work on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptySourcePolicy {
    /// Produce an empty name and pass it on.
    #[default]
    Allow,
    /// Report failure without touching the profile.
    Reject,
}

/// Name engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Length of generated names when the command omits one.
    #[serde(default = "default_random_length")]
    pub random_length: usize,
    #[serde(default)]
    pub empty_source: EmptySourcePolicy,
    /// Unit used for lengths and permutations. Code points unless set to
    /// `grapheme`.
    #[serde(default)]
    pub segmentation: Segmentation,
}

impl EngineConfig {
    /// `random_length` clamped to `[1, MAX_NAME_LENGTH]`.
    pub fn effective_random_length(&self) -> usize {
        self.random_length.clamp(1, MAX_NAME_LENGTH)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            random_length: default_random_length(),
            empty_source: EmptySourcePolicy::default(),
            segmentation: Segmentation::default(),
        }
    }
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Local profile store used by the command-line tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_profile_path")]
    pub path: PathBuf,
    /// Account whose display name is read and updated.
    #[serde(default = "default_account")]
    pub account: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            path: default_profile_path(),
            account: default_account(),
        }
    }
}

fn default_random_length() -> usize {
    DEFAULT_RANDOM_LENGTH
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_profile_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("crabname")
        .join("profiles.toml")
}
fn default_account() -> String {
    "me".to_string()
}

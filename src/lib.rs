//! crabname
//!
//! Unicode-safe display name transformations driven by reply commands:
//! shuffle or randomly sort the current name, replace it with a literal, or
//! generate a new one from curated character pools. Every length is counted
//! in grapheme units, so no transformation ever splits a visible character.

pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod profile;
pub mod random;
pub mod report;
pub mod text;

pub use command::{parse_command, NameCommand};
pub use config::{AppConfig, EngineConfig, MAX_NAME_LENGTH};
pub use engine::{Action, NameEngine, TransformRequest, TransformResult};
pub use error::{ProfileError, TransformError};
pub use profile::{FileProfileStore, MemoryProfiles, ProfileService};

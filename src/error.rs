use thiserror::Error;

/// Why a request could not be turned into a new name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("no source text: no argument given and the current profile name is empty")]
    EmptySource,
}

/// Failures of the local profile store.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile store {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write profile store {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed profile store: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize profile store: {0}")]
    Serialize(#[from] toml::ser::Error),
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to access pricing file at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("invalid pricing configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid server catalog: {0}")]
    InvalidCatalog(String),

    #[error("unknown model: {0}")]
    UnknownModel(String),
}

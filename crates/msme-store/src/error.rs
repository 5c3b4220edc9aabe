use std::path::PathBuf;

use thiserror::Error;

use crate::key::EntityKey;

/// Errors from a persistence backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A value could not be serialized for storage.
    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored value exists but cannot be read back.
    #[error("stored value for {key} is corrupt: {source}")]
    Corrupt {
        key: EntityKey,
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

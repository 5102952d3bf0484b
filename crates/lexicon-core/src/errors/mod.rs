//! Error types for every Lexicon subsystem.

mod storage_error;
mod sync_error;

use std::path::{Path, PathBuf};

pub use storage_error::StorageError;
pub use sync_error::SyncError;

/// Top-level error for all Lexicon operations.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error(transparent)]
    StorageError(#[from] StorageError),

    #[error(transparent)]
    SyncError(#[from] SyncError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O on a caller-supplied reader or writer.
    #[error("stream I/O error: {0}")]
    Stream(#[from] std::io::Error),
}

/// Result alias used throughout the workspace.
pub type LexiconResult<T> = Result<T, LexiconError>;

impl LexiconError {
    /// Wrap an `io::Error` with the path it occurred on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

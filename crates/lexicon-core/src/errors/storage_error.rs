/// Storage-layer errors raised by a user dictionary store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("cannot open user db '{name}': {reason}")]
    OpenFailed { name: String, reason: String },

    #[error("user db '{name}' is not open")]
    NotOpen { name: String },

    #[error("user db '{name}' is open read-only")]
    ReadOnly { name: String },

    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("backup of '{name}' failed: {reason}")]
    BackupFailed { name: String, reason: String },

    #[error("restore from '{snapshot}' failed: {reason}")]
    RestoreFailed { snapshot: String, reason: String },

    #[error("database corruption detected: {details}")]
    CorruptionDetected { details: String },
}

/// Errors raised by the backup / restore / synchronize protocol.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The store does not carry the `userdb` type marker.
    #[error("'{name}' is not a user dictionary")]
    NotAUserDb { name: String },

    /// A snapshot validated but names no destination dictionary.
    #[error("snapshot '{snapshot}' has no db_name")]
    EmptyDbName { snapshot: String },

    /// A snapshot names a dictionary that cannot be a local store.
    #[error("snapshot '{snapshot}' names an invalid dictionary '{name}'")]
    InvalidDbName { snapshot: String, name: String },

    /// Rewriting metadata under the session identity failed.
    #[error("failed to recreate metadata in '{name}': {reason}")]
    IdentityRecreateFailed { name: String, reason: String },

    /// The sync root could not be created or read.
    #[error("sync directory '{path}' unavailable: {reason}")]
    SyncRootUnavailable { path: String, reason: String },

    /// A dictionary finished synchronizing with failures.
    #[error("synchronization of '{dict_name}' incomplete: {failures} failure(s)")]
    SyncIncomplete { dict_name: String, failures: usize },
}

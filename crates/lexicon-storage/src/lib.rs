//! # lexicon-storage
//!
//! SQLite implementation of the user dictionary store capability.
//! One file per dictionary, a single ordered `entries` table, and the SQLite
//! online-backup API for snapshots.

pub mod cursor;
pub mod migrations;
pub mod pragmas;
pub mod provider;
pub mod queries;
pub mod recovery;
pub mod user_db;

pub use cursor::EntryCursor;
pub use provider::SqliteUserDbProvider;
pub use user_db::SqliteUserDb;

use lexicon_core::errors::{LexiconError, StorageError};

/// Wrap a SQLite failure message as a storage error.
pub fn to_storage_err(message: String) -> LexiconError {
    StorageError::SqliteError { message }.into()
}

//! Detect a corrupt store before trusting its contents.

use rusqlite::Connection;

use lexicon_core::errors::{LexiconResult, StorageError};

use crate::queries::maintenance;

/// Fail with `CorruptionDetected` unless the database passes `quick_check`.
pub fn ensure_integrity(conn: &Connection, label: &str) -> LexiconResult<()> {
    if maintenance::quick_check(conn)? {
        Ok(())
    } else {
        Err(StorageError::CorruptionDetected {
            details: format!("quick_check failed for {label}"),
        }
        .into())
    }
}

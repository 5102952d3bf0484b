//! PRAGMA configuration applied to every SQLite connection.

use rusqlite::Connection;

use lexicon_core::config::StorageConfig;
use lexicon_core::errors::LexiconResult;

use crate::to_storage_err;

/// Apply journal, sync, cache and timeout pragmas to a read-write connection.
pub fn apply_pragmas(conn: &Connection, config: &StorageConfig) -> LexiconResult<()> {
    let journal_mode = if config.wal_mode { "WAL" } else { "DELETE" };
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = {journal_mode};
        PRAGMA synchronous = NORMAL;
        PRAGMA cache_size = {cache_size};
        PRAGMA busy_timeout = {busy_timeout};
        ",
        cache_size = config.cache_size,
        busy_timeout = config.busy_timeout_ms,
    ))
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Apply read-only pragmas to a read connection.
/// Skips write-side settings (journal_mode, synchronous).
pub fn apply_read_pragmas(conn: &Connection, config: &StorageConfig) -> LexiconResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA query_only = ON;
        PRAGMA cache_size = {cache_size};
        PRAGMA busy_timeout = {busy_timeout};
        PRAGMA temp_store = MEMORY;
        ",
        cache_size = config.cache_size,
        busy_timeout = config.busy_timeout_ms,
    ))
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Current journal mode of a connection, lowercased.
pub fn journal_mode(conn: &Connection) -> LexiconResult<String> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.to_ascii_lowercase())
}

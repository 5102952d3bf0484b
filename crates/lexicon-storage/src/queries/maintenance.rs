//! Database health checks.

use rusqlite::Connection;

use lexicon_core::errors::LexiconResult;

use crate::to_storage_err;

/// Run `PRAGMA quick_check`. Returns true if the database is healthy.
pub fn quick_check(conn: &Connection) -> LexiconResult<bool> {
    let result: String = conn
        .query_row("PRAGMA quick_check", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(result == "ok")
}

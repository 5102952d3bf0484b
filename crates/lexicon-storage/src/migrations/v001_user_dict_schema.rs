//! v001: the `entries` key-value table holding records and metadata.

use rusqlite::Connection;

use lexicon_core::errors::LexiconResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> LexiconResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS entries (
            key    TEXT PRIMARY KEY,
            value  TEXT NOT NULL
        ) WITHOUT ROWID;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

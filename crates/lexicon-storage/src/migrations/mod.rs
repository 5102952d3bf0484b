//! Schema migrations, applied in order on every read-write open.

mod v001_user_dict_schema;

use rusqlite::Connection;

use lexicon_core::errors::LexiconResult;

use crate::to_storage_err;

type Migration = fn(&Connection) -> LexiconResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[(1, v001_user_dict_schema::migrate)];

/// Latest schema version known to this build.
pub const LATEST_VERSION: u32 = 1;

/// Apply every migration newer than the recorded schema version.
pub fn run_migrations(conn: &Connection) -> LexiconResult<u32> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    for (version, migrate) in MIGRATIONS {
        if *version <= current {
            continue;
        }
        migrate(conn)?;
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            rusqlite::params![version],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        tracing::debug!(version, "applied user db migration");
    }
    Ok(LATEST_VERSION.max(current))
}

/// Highest applied schema version, 0 for a blank database.
pub fn current_version(conn: &Connection) -> LexiconResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

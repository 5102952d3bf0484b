//! Point reads, upserts and ordered range scans over the `entries` table.

use rusqlite::{params, Connection, OptionalExtension};

use lexicon_core::errors::LexiconResult;

use crate::to_storage_err;

pub fn get_value(conn: &Connection, key: &str) -> LexiconResult<Option<String>> {
    conn.query_row(
        "SELECT value FROM entries WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn put_value(conn: &Connection, key: &str, value: &str) -> LexiconResult<()> {
    conn.execute(
        "INSERT INTO entries (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Put a value only if the key is absent. Returns true if it was written.
pub fn put_value_if_absent(conn: &Connection, key: &str, value: &str) -> LexiconResult<bool> {
    let inserted = conn
        .execute(
            "INSERT OR IGNORE INTO entries (key, value) VALUES (?1, ?2)",
            params![key, value],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(inserted > 0)
}

/// Next page of rows in key order.
///
/// Starts at `start` (inclusive) for the first page, and strictly after
/// `after` for every following page.
pub fn scan_page(
    conn: &Connection,
    start: &str,
    after: Option<&str>,
    limit: usize,
) -> LexiconResult<Vec<(String, String)>> {
    let (sql, bound) = match after {
        Some(last) => (
            "SELECT key, value FROM entries WHERE key > ?1 ORDER BY key LIMIT ?2",
            last,
        ),
        None => (
            "SELECT key, value FROM entries WHERE key >= ?1 ORDER BY key LIMIT ?2",
            start,
        ),
    };
    let mut stmt = conn
        .prepare_cached(sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![bound, limit as i64], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn count_entries(conn: &Connection) -> LexiconResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

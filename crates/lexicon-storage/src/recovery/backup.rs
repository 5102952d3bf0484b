//! Snapshot creation and restore through the SQLite online-backup API.

use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, OpenFlags};

use lexicon_core::errors::{LexiconResult, StorageError};

const PAGES_PER_STEP: std::os::raw::c_int = 100;
const STEP_PAUSE: Duration = Duration::from_millis(10);

/// Copy the whole database behind `conn` into a new file at `backup_path`.
pub fn create_backup(conn: &Connection, name: &str, backup_path: &Path) -> LexiconResult<()> {
    let failed = |reason: String| StorageError::BackupFailed {
        name: name.to_string(),
        reason,
    };

    let mut dst =
        Connection::open(backup_path).map_err(|e| failed(format!("open backup dest: {e}")))?;

    let backup = rusqlite::backup::Backup::new(conn, &mut dst)
        .map_err(|e| failed(format!("init backup: {e}")))?;

    backup
        .run_to_completion(PAGES_PER_STEP, STEP_PAUSE, None)
        .map_err(|e| failed(format!("run backup: {e}")))?;

    Ok(())
}

/// Replace the database behind `conn` with the contents of `backup_path`.
pub fn restore_from_backup(conn: &mut Connection, backup_path: &Path) -> LexiconResult<()> {
    let failed = |reason: String| StorageError::RestoreFailed {
        snapshot: backup_path.display().to_string(),
        reason,
    };

    if !backup_path.is_file() {
        return Err(failed("no such file".to_string()).into());
    }

    let src = Connection::open_with_flags(
        backup_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| failed(format!("open backup source: {e}")))?;

    let backup = rusqlite::backup::Backup::new(&src, conn)
        .map_err(|e| failed(format!("init restore: {e}")))?;

    backup
        .run_to_completion(PAGES_PER_STEP, STEP_PAUSE, None)
        .map_err(|e| failed(format!("run restore: {e}")))?;

    Ok(())
}

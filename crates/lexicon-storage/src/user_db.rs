//! SqliteUserDb: one SQLite file per user dictionary, implementing IUserDb.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use lexicon_core::config::StorageConfig;
use lexicon_core::constants::{
    snapshot_file_name, user_db_file_name, INITIAL_TICK, META_CREATOR_VERSION, META_DB_NAME,
    META_DB_TYPE, META_TICK, META_USER_ID, USER_DB_TYPE, VERSION,
};
use lexicon_core::errors::{LexiconError, LexiconResult, StorageError};
use lexicon_core::traits::RecordCursor;
use lexicon_core::{IUserDb, UserId};

use crate::cursor::EntryCursor;
use crate::queries::entry_ops;
use crate::recovery::{backup, integrity_check};
use crate::{migrations, pragmas};

/// Sidecar files SQLite may leave next to the main database file.
const SIDECAR_SUFFIXES: &[&str] = &["-journal", "-wal", "-shm"];

/// Extension of a snapshot while it is still being written.
const PARTIAL_SNAPSHOT_EXTENSION: &str = "snapshot.tmp";

/// A user dictionary stored at `<user_data_dir>/<name>.userdb.sqlite`.
///
/// The connection closes when the handle is dropped.
pub struct SqliteUserDb {
    name: String,
    path: PathBuf,
    config: StorageConfig,
    conn: Option<Connection>,
    read_only: bool,
}

impl SqliteUserDb {
    pub fn new(name: &str, user_data_dir: &Path, config: StorageConfig) -> Self {
        Self {
            name: name.to_string(),
            path: user_data_dir.join(user_db_file_name(name)),
            config,
            conn: None,
            read_only: false,
        }
    }

    /// Number of stored keys, metadata included.
    pub fn len(&self) -> LexiconResult<usize> {
        entry_ops::count_entries(self.conn()?)
    }

    pub fn is_empty(&self) -> LexiconResult<bool> {
        Ok(self.len()? == 0)
    }

    fn conn(&self) -> LexiconResult<&Connection> {
        self.conn.as_ref().ok_or_else(|| self.not_open())
    }

    fn writer(&self) -> LexiconResult<&Connection> {
        let conn = self.conn()?;
        if self.read_only {
            return Err(StorageError::ReadOnly {
                name: self.name.clone(),
            }
            .into());
        }
        Ok(conn)
    }

    fn not_open(&self) -> LexiconError {
        StorageError::NotOpen {
            name: self.name.clone(),
        }
        .into()
    }

    fn open_failed(&self, reason: impl ToString) -> LexiconError {
        StorageError::OpenFailed {
            name: self.name.clone(),
            reason: reason.to_string(),
        }
        .into()
    }

    /// Metadata every store carries from the moment it is created.
    fn write_base_metadata(&self) -> LexiconResult<()> {
        let conn = self.writer()?;
        entry_ops::put_value(conn, META_DB_NAME, &self.name)?;
        entry_ops::put_value(conn, META_DB_TYPE, USER_DB_TYPE)?;
        entry_ops::put_value(conn, META_CREATOR_VERSION, VERSION)?;
        entry_ops::put_value_if_absent(conn, META_TICK, &INITIAL_TICK.to_string())?;
        Ok(())
    }
}

impl IUserDb for SqliteUserDb {
    fn name(&self) -> &str {
        &self.name
    }

    fn file_path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn open(&mut self) -> LexiconResult<()> {
        if self.is_open() {
            if !self.read_only {
                return Ok(());
            }
            self.close()?;
        }
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| self.open_failed(e))?;
        }
        let created = !self.exists();
        let conn = Connection::open(&self.path).map_err(|e| self.open_failed(e))?;
        pragmas::apply_pragmas(&conn, &self.config)?;
        migrations::run_migrations(&conn)?;
        self.conn = Some(conn);
        self.read_only = false;
        if created {
            self.write_base_metadata()?;
            tracing::info!(name = %self.name, path = %self.path.display(), "created user db");
        }
        Ok(())
    }

    fn open_read_only(&mut self) -> LexiconResult<()> {
        if self.is_open() {
            self.close()?;
        }
        if !self.exists() {
            return Err(self.open_failed("no such store"));
        }
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| self.open_failed(e))?;
        pragmas::apply_read_pragmas(&conn, &self.config)?;
        self.conn = Some(conn);
        self.read_only = true;
        Ok(())
    }

    fn close(&mut self) -> LexiconResult<()> {
        self.read_only = false;
        if let Some(conn) = self.conn.take() {
            conn.close().map_err(|(_, e)| {
                LexiconError::from(StorageError::SqliteError {
                    message: format!("close '{}': {e}", self.name),
                })
            })?;
        }
        Ok(())
    }

    fn remove(&mut self) -> LexiconResult<()> {
        self.close()?;
        let main = self.path.clone();
        let sidecars = SIDECAR_SUFFIXES.iter().map(|suffix| {
            let mut os = main.clone().into_os_string();
            os.push(suffix);
            PathBuf::from(os)
        });
        for file in std::iter::once(main.clone()).chain(sidecars) {
            if file.exists() {
                std::fs::remove_file(&file).map_err(|e| LexiconError::io(&file, e))?;
            }
        }
        tracing::debug!(name = %self.name, "removed user db");
        Ok(())
    }

    fn fetch(&self, key: &str) -> LexiconResult<Option<String>> {
        entry_ops::get_value(self.conn()?, key)
    }

    fn update(&self, key: &str, value: &str) -> LexiconResult<()> {
        entry_ops::put_value(self.writer()?, key, value)
    }

    fn query(&self, prefix: &str) -> LexiconResult<RecordCursor<'_>> {
        Ok(Box::new(EntryCursor::new(self.conn()?, prefix)))
    }

    fn backup(&self, snapshot_dir: &Path) -> LexiconResult<PathBuf> {
        let conn = self.conn()?;
        std::fs::create_dir_all(snapshot_dir).map_err(|e| LexiconError::io(snapshot_dir, e))?;
        let snapshot = snapshot_dir.join(snapshot_file_name(&self.name));
        // The published snapshot is only replaced once a complete copy exists.
        let partial = snapshot.with_extension(PARTIAL_SNAPSHOT_EXTENSION);
        if partial.exists() {
            std::fs::remove_file(&partial).map_err(|e| LexiconError::io(&partial, e))?;
        }
        if let Err(e) = backup::create_backup(conn, &self.name, &partial) {
            if let Err(cleanup) = std::fs::remove_file(&partial) {
                tracing::debug!(path = %partial.display(), error = %cleanup, "no partial snapshot to remove");
            }
            return Err(e);
        }
        std::fs::rename(&partial, &snapshot).map_err(|e| LexiconError::io(&snapshot, e))?;
        tracing::info!(name = %self.name, snapshot = %snapshot.display(), "user db backed up");
        Ok(snapshot)
    }

    fn restore(&mut self, snapshot: &Path) -> LexiconResult<()> {
        self.writer()?;
        let conn = self.conn.as_mut().ok_or_else(|| StorageError::NotOpen {
            name: self.name.clone(),
        })?;
        backup::restore_from_backup(conn, snapshot)?;
        integrity_check::ensure_integrity(conn, &snapshot.display().to_string())?;
        tracing::debug!(name = %self.name, snapshot = %snapshot.display(), "snapshot restored");
        Ok(())
    }

    fn create_metadata(&self, user_id: &UserId) -> LexiconResult<()> {
        self.write_base_metadata()?;
        entry_ops::put_value(self.writer()?, META_USER_ID, user_id.as_str())
    }
}

use std::path::{Path, PathBuf};

use crate::errors::LexiconResult;
use crate::models::UserId;

/// Ordered `(key, value)` pairs. Iteration order is stable across calls.
pub type RecordCursor<'a> = Box<dyn Iterator<Item = LexiconResult<(String, String)>> + 'a>;

/// Key-value capability backing a single user dictionary.
///
/// A store is single-writer: at most one read-write handle per file at a time.
pub trait IUserDb {
    /// Dictionary name, without storage suffixes.
    fn name(&self) -> &str;
    /// Location of the backing file.
    fn file_path(&self) -> &Path;

    // --- Lifecycle ---
    fn exists(&self) -> bool;
    fn is_open(&self) -> bool;
    fn is_read_only(&self) -> bool;
    /// Open read-write, creating the store (and its base metadata) if absent.
    fn open(&mut self) -> LexiconResult<()>;
    /// Open an existing store read-only.
    fn open_read_only(&mut self) -> LexiconResult<()>;
    fn close(&mut self) -> LexiconResult<()>;
    /// Close if open, then delete the backing file.
    fn remove(&mut self) -> LexiconResult<()>;

    // --- Records ---
    fn fetch(&self, key: &str) -> LexiconResult<Option<String>>;
    fn update(&self, key: &str, value: &str) -> LexiconResult<()>;
    /// Cursor over every key starting with `prefix`, in key order.
    fn query(&self, prefix: &str) -> LexiconResult<RecordCursor<'_>>;

    // --- Snapshots ---
    /// Write a full snapshot into `snapshot_dir` under the conventional file name.
    fn backup(&self, snapshot_dir: &Path) -> LexiconResult<PathBuf>;
    /// Replace the whole key space with the contents of a snapshot.
    fn restore(&mut self, snapshot: &Path) -> LexiconResult<()>;

    /// Record `db_name`, `db_type`, `creator_version` and `user_id`, keeping an existing tick.
    fn create_metadata(&self, user_id: &UserId) -> LexiconResult<()>;
}

/// Creates stores by dictionary name within one user data directory.
pub trait IUserDbProvider {
    type Db: IUserDb;

    fn user_db(&self, name: &str) -> Self::Db;
    fn user_data_dir(&self) -> &Path;
}

//! Backup a store to a snapshot file, and merge a snapshot back into its store.

use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use lexicon_core::constants::WORKING_STORE_NAME;
use lexicon_core::errors::{LexiconResult, SyncError};
use lexicon_core::models::metadata::{is_user_db, read_db_name, read_user_id};
use lexicon_core::models::MergeReport;
use lexicon_core::{IDecayModel, IUserDb, IUserDbProvider, UserId};

use crate::merge::MergeEngine;

/// A disposable store that is closed and deleted when dropped.
pub struct WorkingStore<D: IUserDb> {
    db: D,
}

impl<D: IUserDb> WorkingStore<D> {
    /// Discard any stale copy, then create the store afresh.
    pub fn create(db: D) -> LexiconResult<Self> {
        let mut store = Self { db };
        if store.db.exists() {
            store.db.remove()?;
        }
        store.db.open()?;
        Ok(store)
    }
}

impl<D: IUserDb> Deref for WorkingStore<D> {
    type Target = D;

    fn deref(&self) -> &D {
        &self.db
    }
}

impl<D: IUserDb> DerefMut for WorkingStore<D> {
    fn deref_mut(&mut self) -> &mut D {
        &mut self.db
    }
}

impl<D: IUserDb> Drop for WorkingStore<D> {
    fn drop(&mut self) {
        if let Err(e) = self.db.remove() {
            warn!(path = %self.db.file_path().display(), error = %e, "failed to remove working store");
        }
    }
}

/// Write a snapshot of `dict_name` into `snapshot_dir`.
///
/// A store last stamped by another identity has its metadata recreated under
/// `session` first; if that fails nothing is written.
pub fn backup<P: IUserDbProvider>(
    provider: &P,
    snapshot_dir: &Path,
    dict_name: &str,
    session: &UserId,
) -> LexiconResult<PathBuf> {
    let mut db = provider.user_db(dict_name);
    db.open_read_only()?;
    if read_user_id(&db)? != session.as_str() {
        info!(dict_name, "user id not match; recreating metadata");
        if let Err(e) = recreate_metadata(&mut db, session) {
            error!(dict_name, error = %e, "failed to recreate metadata");
            return Err(SyncError::IdentityRecreateFailed {
                name: dict_name.to_string(),
                reason: e.to_string(),
            }
            .into());
        }
    }
    db.backup(snapshot_dir)
}

fn recreate_metadata<D: IUserDb>(db: &mut D, session: &UserId) -> LexiconResult<()> {
    db.close()?;
    db.open()?;
    db.create_metadata(session)
}

/// Merge a snapshot into the local store it was taken from.
///
/// The snapshot is loaded into a working store that is deleted on every exit
/// path. The destination is named by the snapshot's `db_name` and created if
/// absent. Nothing is written to it unless the snapshot validates.
pub fn restore<P, M>(
    provider: &P,
    decay: &M,
    snapshot: &Path,
    session: &UserId,
) -> LexiconResult<MergeReport>
where
    P: IUserDbProvider,
    M: IDecayModel + ?Sized,
{
    let mut working = WorkingStore::create(provider.user_db(WORKING_STORE_NAME))?;
    working.restore(snapshot)?;

    let snapshot_label = snapshot.display().to_string();
    if !is_user_db(&*working) {
        return Err(SyncError::NotAUserDb {
            name: snapshot_label,
        }
        .into());
    }
    let db_name = read_db_name(&*working)?;
    validate_db_name(&snapshot_label, &db_name)?;

    let mut dest = provider.user_db(&db_name);
    dest.open()?;
    info!(
        snapshot = %snapshot_label,
        from = %read_user_id(&*working)?,
        db_name = %db_name,
        "merging snapshot into user db"
    );
    let report = MergeEngine::new(decay).merge(&*working, &dest, session)?;
    dest.close()?;
    Ok(report)
}

/// Check the `db_name` recorded in a store before anything is written under it.
pub(crate) fn validate_db_name(label: &str, db_name: &str) -> LexiconResult<()> {
    if db_name.is_empty() {
        return Err(SyncError::EmptyDbName {
            snapshot: label.to_string(),
        }
        .into());
    }
    if !is_valid_dict_name(db_name) {
        return Err(SyncError::InvalidDbName {
            snapshot: label.to_string(),
            name: db_name.to_string(),
        }
        .into());
    }
    Ok(())
}

/// A dictionary name must map to a single visible file in the data directory.
fn is_valid_dict_name(name: &str) -> bool {
    !name.starts_with('.') && !name.contains(['/', '\\'])
}

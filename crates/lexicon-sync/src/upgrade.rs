//! Rebuild stores created by versions that wrote keys without the space before the tab.

use std::path::Path;

use tracing::info;

use lexicon_core::constants::{KEY_REPAIR_VERSION, META_CREATOR_VERSION};
use lexicon_core::errors::{LexiconResult, SyncError};
use lexicon_core::models::metadata::{is_user_db, read_db_name};
use lexicon_core::models::UpgradeOutcome;
use lexicon_core::version::is_older_than;
use lexicon_core::{IDecayModel, IUserDb, IUserDbProvider, UserId};

use crate::snapshot;

/// True if a store written by `creator_version` may hold unrepaired keys.
pub fn needs_key_repair(creator_version: &str) -> bool {
    is_older_than(creator_version, KEY_REPAIR_VERSION)
}

/// Upgrade `dict_name` if its creator version predates the key fix.
///
/// The store is snapshotted into `snapshot_dir`, deleted, and rebuilt by
/// restoring the snapshot, which repairs every key on the way in. A store
/// whose recorded `db_name` is not `dict_name` is left untouched.
pub fn upgrade_user_dict<P, M>(
    provider: &P,
    decay: &M,
    snapshot_dir: &Path,
    dict_name: &str,
    session: &UserId,
) -> LexiconResult<UpgradeOutcome>
where
    P: IUserDbProvider,
    M: IDecayModel + ?Sized,
{
    let mut db = provider.user_db(dict_name);
    db.open_read_only()?;
    if !is_user_db(&db) {
        return Err(SyncError::NotAUserDb {
            name: dict_name.to_string(),
        }
        .into());
    }
    let creator_version = db.fetch(META_CREATOR_VERSION)?.unwrap_or_default();
    if !needs_key_repair(&creator_version) {
        return Ok(UpgradeOutcome::Current);
    }

    // The rebuild restores into the store named by db_name, so it must name this one.
    let db_name = read_db_name(&db)?;
    snapshot::validate_db_name(dict_name, &db_name)?;
    if db_name != dict_name {
        return Err(SyncError::InvalidDbName {
            snapshot: dict_name.to_string(),
            name: db_name,
        }
        .into());
    }

    info!(dict_name, creator_version = %creator_version, "upgrading user dict");
    let snapshot_file = db.backup(snapshot_dir)?;
    db.remove()?;
    let report = snapshot::restore(provider, decay, &snapshot_file, session)?;
    Ok(UpgradeOutcome::Upgraded(report))
}

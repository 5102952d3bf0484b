//! Merge every peer's snapshot of a dictionary, then publish our own.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{error, info};

use lexicon_core::constants::snapshot_file_name;
use lexicon_core::errors::{LexiconError, LexiconResult, SyncError};
use lexicon_core::models::{PeerFailure, SyncReport};
use lexicon_core::{IDecayModel, IUserDbProvider, UserId};

use crate::{dict_list, snapshot};

/// Synchronize one dictionary against the sync root.
///
/// Every peer folder holding a snapshot of `dict_name` is merged, continuing
/// past failures, and the merged store is then backed up into the
/// `session` folder. Only a sync root that cannot be created or read is an
/// error; merge and backup failures are recorded in the report.
pub fn synchronize<P, M>(
    provider: &P,
    decay: &M,
    sync_dir: &Path,
    dict_name: &str,
    session: &UserId,
) -> LexiconResult<SyncReport>
where
    P: IUserDbProvider,
    M: IDecayModel + ?Sized,
{
    info!(dict_name, "synchronize user dict");
    let mut report = SyncReport::new(dict_name);
    ensure_sync_root(sync_dir)?;

    let snapshot_name = snapshot_file_name(dict_name);
    for peer_dir in peer_dirs(sync_dir)? {
        let snapshot_file = peer_dir.join(&snapshot_name);
        if !snapshot_file.is_file() {
            continue;
        }
        info!(snapshot = %snapshot_file.display(), "merging snapshot file");
        match snapshot::restore(provider, decay, &snapshot_file, session) {
            Ok(merged) => report.merged.push(merged),
            Err(e) => {
                error!(snapshot = %snapshot_file.display(), error = %e, "failed to merge snapshot file");
                report.failures.push(PeerFailure {
                    snapshot: snapshot_file,
                    reason: e.to_string(),
                });
            }
        }
    }

    let own_dir = sync_dir.join(session.as_str());
    match snapshot::backup(provider, &own_dir, dict_name, session) {
        Ok(path) => report.backup = Some(path),
        Err(e) => {
            error!(dict_name, error = %e, "error backing up user dict");
            report.backup_error = Some(e.to_string());
        }
    }
    report.finished_at = Utc::now();
    Ok(report)
}

/// Synchronize every local dictionary, stopping at the first that fails.
pub fn synchronize_all<P, M>(
    provider: &P,
    decay: &M,
    sync_dir: &Path,
    session: &UserId,
) -> LexiconResult<Vec<SyncReport>>
where
    P: IUserDbProvider,
    M: IDecayModel + ?Sized,
{
    let dicts = dict_list::user_dict_list(provider.user_data_dir())?;
    info!(count = dicts.len(), "synchronizing user dicts");
    let mut reports = Vec::with_capacity(dicts.len());
    for dict_name in dicts {
        let report = synchronize(provider, decay, sync_dir, &dict_name, session)?;
        if !report.is_success() {
            return Err(SyncError::SyncIncomplete {
                failures: report.failure_count(),
                dict_name,
            }
            .into());
        }
        reports.push(report);
    }
    Ok(reports)
}

fn ensure_sync_root(sync_dir: &Path) -> LexiconResult<()> {
    if sync_dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(sync_dir).map_err(|e| {
        error!(dir = %sync_dir.display(), error = %e, "error creating directory");
        LexiconError::from(SyncError::SyncRootUnavailable {
            path: sync_dir.display().to_string(),
            reason: e.to_string(),
        })
    })
}

/// Peer folders directly under the sync root, sorted by name.
fn peer_dirs(sync_dir: &Path) -> LexiconResult<Vec<PathBuf>> {
    let unavailable = |e: std::io::Error| SyncError::SyncRootUnavailable {
        path: sync_dir.display().to_string(),
        reason: e.to_string(),
    };
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(sync_dir).map_err(unavailable)? {
        let path = entry.map_err(unavailable)?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

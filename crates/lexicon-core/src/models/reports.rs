//! Outcomes of merge, upgrade, and synchronize operations.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TickCount;

/// Result of merging one source store into a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeReport {
    /// Destination dictionary name.
    pub db_name: String,
    /// `user_id` recorded in the source store.
    pub source_user_id: String,
    /// Entries written to the destination.
    pub entries_merged: usize,
    /// Source keys skipped as malformed.
    pub keys_skipped: usize,
    /// Legacy keys that needed the space before the tab restored.
    pub keys_repaired: usize,
    /// `max(dest.tick, src.tick)`; the destination tick when anything was merged.
    pub tick: TickCount,
}

impl MergeReport {
    /// Nothing was written. Reported, but not a failure.
    pub fn is_empty(&self) -> bool {
        self.entries_merged == 0
    }
}

/// A peer snapshot that failed to merge during synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerFailure {
    pub snapshot: PathBuf,
    pub reason: String,
}

/// Result of synchronizing one dictionary against the sync root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    pub dict_name: String,
    pub merged: Vec<MergeReport>,
    pub failures: Vec<PeerFailure>,
    /// Snapshot written for this session, if the final backup succeeded.
    pub backup: Option<PathBuf>,
    pub backup_error: Option<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl SyncReport {
    pub fn new(dict_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            dict_name: dict_name.into(),
            merged: Vec::new(),
            failures: Vec::new(),
            backup: None,
            backup_error: None,
            started_at: now,
            finished_at: now,
        }
    }

    /// Every discovered snapshot merged and the final backup was written.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.backup.is_some()
    }

    /// Failed merges plus a failed backup.
    pub fn failure_count(&self) -> usize {
        self.failures.len() + usize::from(self.backup_error.is_some())
    }

    pub fn entries_merged(&self) -> usize {
        self.merged.iter().map(|m| m.entries_merged).sum()
    }
}

/// Result of checking a store for the legacy key format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UpgradeOutcome {
    /// The creator version is at or above the repair threshold.
    Current,
    /// The store was rebuilt from its own snapshot.
    Upgraded(MergeReport),
}

//! UserDictManager: the single entry point for dictionary maintenance.

use std::path::{Path, PathBuf};

use tracing::instrument;

use lexicon_core::models::{MergeReport, SyncReport, UpgradeOutcome};
use lexicon_core::{IDecayModel, IUserDbProvider, LexiconConfig, LexiconResult, UserId};
use lexicon_decay::DecayEngine;
use lexicon_storage::SqliteUserDbProvider;

use crate::{dict_list, snapshot, synchronizer, text_format, upgrade};

/// Binds a store provider, a decay model, and a sync root.
///
/// Operations that write on behalf of a device take the session identity
/// explicitly.
pub struct UserDictManager<P: IUserDbProvider, M: IDecayModel = DecayEngine> {
    provider: P,
    decay: M,
    sync_dir: PathBuf,
}

impl UserDictManager<SqliteUserDbProvider, DecayEngine> {
    /// SQLite-backed manager with directories and half-life from `config`.
    pub fn from_config(config: &LexiconConfig) -> Self {
        let provider = SqliteUserDbProvider::new(config.user_data_dir(), config.storage.clone());
        Self::new(provider, DecayEngine::from_config(&config.decay), config.sync_dir())
    }
}

impl<P: IUserDbProvider, M: IDecayModel> UserDictManager<P, M> {
    pub fn new(provider: P, decay: M, sync_dir: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            decay,
            sync_dir: sync_dir.into(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn sync_dir(&self) -> &Path {
        &self.sync_dir
    }

    /// Folder this device publishes its snapshots to.
    pub fn snapshot_dir(&self, session: &UserId) -> PathBuf {
        self.sync_dir.join(session.as_str())
    }

    pub fn user_dict_list(&self) -> LexiconResult<Vec<String>> {
        dict_list::user_dict_list(self.provider.user_data_dir())
    }

    /// Snapshot `dict_name` into this device's sync folder.
    #[instrument(skip(self))]
    pub fn backup(&self, dict_name: &str, session: &UserId) -> LexiconResult<PathBuf> {
        snapshot::backup(&self.provider, &self.snapshot_dir(session), dict_name, session)
    }

    /// Merge a snapshot file into the local store it names.
    #[instrument(skip(self))]
    pub fn restore(&self, snapshot_file: &Path, session: &UserId) -> LexiconResult<MergeReport> {
        snapshot::restore(&self.provider, &self.decay, snapshot_file, session)
    }

    #[instrument(skip(self))]
    pub fn export(&self, dict_name: &str, text_file: &Path) -> LexiconResult<usize> {
        text_format::export(&self.provider, dict_name, text_file)
    }

    #[instrument(skip(self))]
    pub fn import(
        &self,
        dict_name: &str,
        text_file: &Path,
        session: &UserId,
    ) -> LexiconResult<usize> {
        text_format::import(&self.provider, dict_name, text_file, session)
    }

    /// Rebuild `dict_name` if it was written with the legacy key format.
    #[instrument(skip(self))]
    pub fn upgrade_user_dict(
        &self,
        dict_name: &str,
        session: &UserId,
    ) -> LexiconResult<UpgradeOutcome> {
        upgrade::upgrade_user_dict(
            &self.provider,
            &self.decay,
            &self.snapshot_dir(session),
            dict_name,
            session,
        )
    }

    #[instrument(skip(self))]
    pub fn synchronize(&self, dict_name: &str, session: &UserId) -> LexiconResult<SyncReport> {
        synchronizer::synchronize(&self.provider, &self.decay, &self.sync_dir, dict_name, session)
    }

    #[instrument(skip(self))]
    pub fn synchronize_all(&self, session: &UserId) -> LexiconResult<Vec<SyncReport>> {
        synchronizer::synchronize_all(&self.provider, &self.decay, &self.sync_dir, session)
    }
}

use std::path::{Path, PathBuf};

use lexicon_core::config::StorageConfig;
use lexicon_core::IUserDbProvider;

use crate::SqliteUserDb;

/// Creates `SqliteUserDb` handles inside one user data directory.
#[derive(Debug, Clone)]
pub struct SqliteUserDbProvider {
    user_data_dir: PathBuf,
    config: StorageConfig,
}

impl SqliteUserDbProvider {
    pub fn new(user_data_dir: impl Into<PathBuf>, config: StorageConfig) -> Self {
        Self {
            user_data_dir: user_data_dir.into(),
            config,
        }
    }

    /// Provider rooted at the configured `user_data_dir`.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.user_data_dir, config.clone())
    }
}

impl IUserDbProvider for SqliteUserDbProvider {
    type Db = SqliteUserDb;

    fn user_db(&self, name: &str) -> SqliteUserDb {
        SqliteUserDb::new(name, &self.user_data_dir, self.config.clone())
    }

    fn user_data_dir(&self) -> &Path {
        &self.user_data_dir
    }
}

//! Configuration loaded from TOML. Every section and field is optional.

pub mod decay_config;
pub mod defaults;
pub mod storage_config;
pub mod sync_config;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use decay_config::DecayConfig;
pub use storage_config::StorageConfig;
pub use sync_config::{IdentityConfig, SyncConfig};

use crate::errors::{LexiconError, LexiconResult};

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub storage: StorageConfig,
    pub decay: DecayConfig,
    pub sync: SyncConfig,
    pub identity: IdentityConfig,
}

impl LexiconConfig {
    /// Parse a TOML string. Missing fields take their defaults.
    pub fn from_toml(toml_str: &str) -> LexiconResult<Self> {
        toml::from_str(toml_str).map_err(|e| LexiconError::ConfigError(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> LexiconResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| LexiconError::io(path, e))?;
        Self::from_toml(&text)
    }

    pub fn user_data_dir(&self) -> PathBuf {
        PathBuf::from(&self.storage.user_data_dir)
    }

    /// The sync root, resolved against the user data dir when relative.
    pub fn sync_dir(&self) -> PathBuf {
        let sync_dir = Path::new(&self.sync.sync_dir);
        if sync_dir.is_absolute() {
            sync_dir.to_path_buf()
        } else {
            self.user_data_dir().join(sync_dir)
        }
    }
}

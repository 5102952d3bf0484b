use serde::{Deserialize, Serialize};

use super::defaults;

/// Synchronization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Shared sync root. Relative paths resolve against the user data dir.
    pub sync_dir: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            sync_dir: defaults::DEFAULT_SYNC_DIR.to_string(),
        }
    }
}

/// Session identity configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Id of this installation. Generated when absent.
    pub user_id: Option<String>,
}

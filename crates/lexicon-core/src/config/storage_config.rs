use serde::{Deserialize, Serialize};

use super::defaults;

/// Storage subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the local `<name>.userdb.sqlite` stores.
    pub user_data_dir: String,
    /// Enable WAL journal mode. Off by default so that a closed store is a single file.
    pub wal_mode: bool,
    /// Busy timeout in milliseconds.
    pub busy_timeout_ms: u32,
    /// Page cache size (negative = KB).
    pub cache_size: i64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            user_data_dir: defaults::DEFAULT_USER_DATA_DIR.to_string(),
            wal_mode: defaults::DEFAULT_WAL_MODE,
            busy_timeout_ms: defaults::DEFAULT_BUSY_TIMEOUT_MS,
            cache_size: defaults::DEFAULT_CACHE_SIZE,
        }
    }
}

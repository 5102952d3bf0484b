// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_USER_DATA_DIR: &str = ".";
pub const DEFAULT_WAL_MODE: bool = false;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_CACHE_SIZE: i64 = -8_000; // 8 MB (negative = KB)

// --- Decay ---
pub const DEFAULT_HALF_LIFE_TICKS: f64 = 200.0;

// --- Sync ---
pub const DEFAULT_SYNC_DIR: &str = "sync";

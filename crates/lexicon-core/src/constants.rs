/// Lexicon version, recorded as `creator_version` in every store it creates.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Literal stored under `db_type` in every valid user dictionary.
pub const USER_DB_TYPE: &str = "userdb";

/// Prefix of the reserved metadata namespace. `\x01` never occurs in a code token.
pub const METADATA_PREFIX: &str = "\x01/";

pub const META_DB_TYPE: &str = "\x01/db_type";
pub const META_DB_NAME: &str = "\x01/db_name";
pub const META_USER_ID: &str = "\x01/user_id";
pub const META_TICK: &str = "\x01/tick";
pub const META_CREATOR_VERSION: &str = "\x01/creator_version";

/// `user_id` reported for stores that never recorded one.
pub const UNKNOWN_USER_ID: &str = "unknown";

/// Store-wide tick of a freshly created store, also the fallback for an unreadable tick.
pub const INITIAL_TICK: u64 = 1;

/// File suffix of a local user dictionary store: `<name>.userdb.sqlite`.
pub const USER_DB_FILE_SUFFIX: &str = ".userdb.sqlite";

/// Appended to the store file name to form its snapshot name.
pub const SNAPSHOT_SUFFIX: &str = ".snapshot";

/// Suffixes stripped from a recorded `db_name`, in order.
pub const DB_NAME_SUFFIXES: &[&str] = &[".sqlite", ".userdb"];

/// Name of the disposable working store used while restoring a snapshot.
pub const WORKING_STORE_NAME: &str = ".temp";

/// Stores created before this version may hold keys without the space before the tab.
pub const KEY_REPAIR_VERSION: &str = "0.9.7";

/// File name of the local store for a dictionary.
pub fn user_db_file_name(dict_name: &str) -> String {
    format!("{dict_name}{USER_DB_FILE_SUFFIX}")
}

/// File name of the snapshot for a dictionary, as found in every peer folder.
pub fn snapshot_file_name(dict_name: &str) -> String {
    format!("{dict_name}{USER_DB_FILE_SUFFIX}{SNAPSHOT_SUFFIX}")
}

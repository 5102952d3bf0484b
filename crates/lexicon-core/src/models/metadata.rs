//! Store metadata kept under the reserved `\x01/` key namespace.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DB_NAME_SUFFIXES, INITIAL_TICK, META_CREATOR_VERSION, META_DB_NAME, META_DB_TYPE, META_TICK,
    META_USER_ID, METADATA_PREFIX, UNKNOWN_USER_ID, USER_DB_TYPE,
};
use crate::errors::LexiconResult;
use crate::models::TickCount;
use crate::traits::IUserDb;

/// Decoded metadata of a user dictionary store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictMetadata {
    pub db_type: Option<String>,
    /// Dictionary name with storage-file suffixes stripped. Empty if unrecorded.
    pub db_name: String,
    pub user_id: String,
    pub tick: TickCount,
    /// Empty if unrecorded.
    pub creator_version: String,
}

impl DictMetadata {
    /// Read every metadata field, applying the fallbacks for missing values.
    pub fn load<D: IUserDb + ?Sized>(db: &D) -> LexiconResult<Self> {
        Ok(Self {
            db_type: db.fetch(META_DB_TYPE)?,
            db_name: read_db_name(db)?,
            user_id: read_user_id(db)?,
            tick: read_tick(db)?,
            creator_version: db.fetch(META_CREATOR_VERSION)?.unwrap_or_default(),
        })
    }

    pub fn is_user_db(&self) -> bool {
        self.db_type.as_deref() == Some(USER_DB_TYPE)
    }
}

/// True if `key` lives in the reserved metadata namespace.
pub fn is_metadata_key(key: &str) -> bool {
    key.starts_with(METADATA_PREFIX)
}

/// True if the store carries the `userdb` type marker.
///
/// A store whose metadata cannot be read at all is not a user dictionary.
pub fn is_user_db<D: IUserDb + ?Sized>(db: &D) -> bool {
    matches!(db.fetch(META_DB_TYPE), Ok(Some(t)) if t == USER_DB_TYPE)
}

pub fn read_db_name<D: IUserDb + ?Sized>(db: &D) -> LexiconResult<String> {
    Ok(db
        .fetch(META_DB_NAME)?
        .map(|name| strip_db_name_suffixes(&name))
        .unwrap_or_default())
}

pub fn read_user_id<D: IUserDb + ?Sized>(db: &D) -> LexiconResult<String> {
    Ok(db
        .fetch(META_USER_ID)?
        .unwrap_or_else(|| UNKNOWN_USER_ID.to_string()))
}

/// Store-wide tick. Missing or unparsable values read as the initial tick.
pub fn read_tick<D: IUserDb + ?Sized>(db: &D) -> LexiconResult<TickCount> {
    Ok(db
        .fetch(META_TICK)?
        .and_then(|tick| tick.trim().parse().ok())
        .unwrap_or(INITIAL_TICK))
}

/// Strip the last occurrence of each known storage suffix, in order.
pub fn strip_db_name_suffixes(name: &str) -> String {
    let mut name = name.to_string();
    for suffix in DB_NAME_SUFFIXES {
        if let Some(pos) = name.rfind(suffix) {
            name.replace_range(pos..pos + suffix.len(), "");
        }
    }
    name
}

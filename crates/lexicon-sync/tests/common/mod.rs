//! Shared fixtures for lexicon-sync integration tests.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::Path;

use lexicon_core::codec::unpack_value;
use lexicon_core::config::StorageConfig;
use lexicon_core::constants::{META_TICK, META_USER_ID};
use lexicon_core::models::metadata::is_metadata_key;
use lexicon_core::{IUserDb, IUserDbProvider, RecordValue, UserId};
use lexicon_storage::{SqliteUserDb, SqliteUserDbProvider};

pub fn provider(dir: &Path) -> SqliteUserDbProvider {
    SqliteUserDbProvider::new(dir, StorageConfig::default())
}

pub fn session(id: &str) -> UserId {
    UserId::new(id)
}

/// Create (or extend) a store with the given identity, tick and raw records,
/// and leave it closed.
pub fn seed(
    provider: &SqliteUserDbProvider,
    name: &str,
    user_id: Option<&str>,
    tick: u64,
    records: &[(&str, &str)],
) {
    let mut db = provider.user_db(name);
    db.open().unwrap();
    if let Some(user_id) = user_id {
        db.update(META_USER_ID, user_id).unwrap();
    }
    db.update(META_TICK, &tick.to_string()).unwrap();
    for (key, value) in records {
        db.update(key, value).unwrap();
    }
    db.close().unwrap();
}

pub fn open(provider: &SqliteUserDbProvider, name: &str) -> SqliteUserDb {
    let mut db = provider.user_db(name);
    db.open().unwrap();
    db
}

pub fn open_read_only(provider: &SqliteUserDbProvider, name: &str) -> SqliteUserDb {
    let mut db = provider.user_db(name);
    db.open_read_only().unwrap();
    db
}

/// Every non-metadata record, decoded.
pub fn records<D: IUserDb>(db: &D) -> BTreeMap<String, RecordValue> {
    db.query("")
        .unwrap()
        .map(Result::unwrap)
        .filter(|(key, _)| !is_metadata_key(key))
        .map(|(key, value)| (key, unpack_value(&value)))
        .collect()
}

/// Records of a closed store, by name.
pub fn records_of(provider: &SqliteUserDbProvider, name: &str) -> BTreeMap<String, RecordValue> {
    records(&open_read_only(provider, name))
}

pub fn working_store_exists(dir: &Path) -> bool {
    dir.join(".temp.userdb.sqlite").exists()
}

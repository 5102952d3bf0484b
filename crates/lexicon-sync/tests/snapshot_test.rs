//! Backup and restore through snapshot files, including working store cleanup.

mod common;

use common::{open, open_read_only, provider, records, records_of, seed, session, working_store_exists};
use lexicon_core::constants::{META_DB_NAME, META_DB_TYPE, META_USER_ID};
use lexicon_core::models::metadata::read_user_id;
use lexicon_core::{IUserDb, IUserDbProvider};
use lexicon_decay::DecayEngine;
use lexicon_sync::snapshot;

// ═══════════════════════════════════════════════════════════════════════════
// BACKUP
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn backup_stamps_session_identity() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    seed(&provider, "luna", None, 4, &[("ni \t你", "c=1 d=1 t=4")]);

    let snapshot_dir = dir.path().join("sync").join("laptop");
    let file = snapshot::backup(&provider, &snapshot_dir, "luna", &session("laptop")).unwrap();

    assert_eq!(file, snapshot_dir.join("luna.userdb.sqlite.snapshot"));
    assert!(file.is_file());
    let store = open_read_only(&provider, "luna");
    assert_eq!(read_user_id(&store).unwrap(), "laptop");
    assert_eq!(records(&store).len(), 1);
}

#[test]
fn backup_of_matching_identity_leaves_store_alone() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    seed(&provider, "luna", Some("laptop"), 4, &[]);
    let snapshot_dir = dir.path().join("out");

    snapshot::backup(&provider, &snapshot_dir, "luna", &session("laptop")).unwrap();
    let store = open_read_only(&provider, "luna");
    assert_eq!(store.fetch(META_USER_ID).unwrap().as_deref(), Some("laptop"));
}

#[test]
fn backup_of_missing_store_fails_without_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    let snapshot_dir = dir.path().join("out");

    assert!(snapshot::backup(&provider, &snapshot_dir, "ghost", &session("laptop")).is_err());
    assert!(!snapshot_dir.join("ghost.userdb.sqlite.snapshot").exists());
    assert!(!provider.user_db("ghost").exists());
}

// ═══════════════════════════════════════════════════════════════════════════
// RESTORE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn restore_creates_destination_from_snapshot() {
    let laptop_dir = tempfile::tempdir().unwrap();
    let desktop_dir = tempfile::tempdir().unwrap();
    let laptop = provider(laptop_dir.path());
    let desktop = provider(desktop_dir.path());
    seed(&laptop, "luna", Some("laptop"), 6, &[("ni \t你", "c=3 d=1.5 t=6")]);
    let file = snapshot::backup(&laptop, laptop_dir.path(), "luna", &session("laptop")).unwrap();

    let report = snapshot::restore(&desktop, &DecayEngine::new(), &file, &session("desktop")).unwrap();

    assert_eq!(report.db_name, "luna");
    assert_eq!(report.source_user_id, "laptop");
    assert_eq!(report.entries_merged, 1);
    let restored = records_of(&desktop, "luna");
    assert_eq!(restored["ni \t你"].commits, 3);
    assert_eq!(restored["ni \t你"].tick, 6);
    assert!(!working_store_exists(desktop_dir.path()));
}

#[test]
fn restore_repairs_legacy_keys() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    seed(&provider, "luna", Some("old"), 2, &[("ni hao\t你好", "c=2 d=1 t=2")]);
    let file = open_read_only(&provider, "luna").backup(&dir.path().join("snap")).unwrap();
    open(&provider, "luna").remove().unwrap();

    let report = snapshot::restore(&provider, &DecayEngine::new(), &file, &session("me")).unwrap();
    assert_eq!(report.keys_repaired, 1);
    let restored = records_of(&provider, "luna");
    assert!(restored.contains_key("ni hao \t你好"));
    assert!(!restored.contains_key("ni hao\t你好"));
}

#[test]
fn stale_working_store_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    seed(&provider, ".temp", None, 1, &[("stale \t旧", "c=1 d=1 t=1")]);
    seed(&provider, "luna", Some("laptop"), 2, &[("ni \t你", "c=1 d=1 t=2")]);
    let file = open_read_only(&provider, "luna").backup(&dir.path().join("snap")).unwrap();

    snapshot::restore(&provider, &DecayEngine::new(), &file, &session("laptop")).unwrap();

    assert!(!working_store_exists(dir.path()));
    assert!(!records_of(&provider, "luna").contains_key("stale \t旧"));
}

#[test]
fn missing_snapshot_fails_and_cleans_up() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    let missing = dir.path().join("nope.userdb.sqlite.snapshot");

    assert!(snapshot::restore(&provider, &DecayEngine::new(), &missing, &session("me")).is_err());
    assert!(!working_store_exists(dir.path()));
}

#[test]
fn non_user_db_snapshot_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    seed(&provider, "luna", Some("laptop"), 2, &[("ni \t你", "c=1 d=1 t=2")]);
    let file = {
        let db = open(&provider, "luna");
        db.update(META_DB_TYPE, "table").unwrap();
        db.backup(&dir.path().join("snap")).unwrap()
    };
    open(&provider, "luna").remove().unwrap();

    let err = snapshot::restore(&provider, &DecayEngine::new(), &file, &session("me")).unwrap_err();
    assert!(err.to_string().contains("not a user dictionary"));
    assert!(!working_store_exists(dir.path()));
    assert!(!provider.user_db("luna").exists());
}

#[test]
fn snapshot_without_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    seed(&provider, "luna", Some("laptop"), 2, &[]);
    let file = {
        let db = open(&provider, "luna");
        db.update(META_DB_NAME, "").unwrap();
        db.backup(&dir.path().join("snap")).unwrap()
    };

    let err = snapshot::restore(&provider, &DecayEngine::new(), &file, &session("me")).unwrap_err();
    assert!(err.to_string().contains("no db_name"));
    assert!(!working_store_exists(dir.path()));
}

#[test]
fn snapshot_naming_a_path_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    seed(&provider, "luna", Some("laptop"), 2, &[]);
    let file = {
        let db = open(&provider, "luna");
        db.update(META_DB_NAME, "../escape").unwrap();
        db.backup(&dir.path().join("snap")).unwrap()
    };

    let err = snapshot::restore(&provider, &DecayEngine::new(), &file, &session("me")).unwrap_err();
    assert!(err.to_string().contains("invalid dictionary"));
    assert!(!dir.path().parent().unwrap().join("escape.userdb.sqlite").exists());
}

#[test]
fn garbage_snapshot_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    let file = dir.path().join("junk.userdb.sqlite.snapshot");
    std::fs::write(&file, "not a database at all, only some words in a file").unwrap();

    assert!(snapshot::restore(&provider, &DecayEngine::new(), &file, &session("me")).is_err());
    assert!(!working_store_exists(dir.path()));
}

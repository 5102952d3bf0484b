//! Export and import of the tab-separated text format.

mod common;

use std::io::Cursor;

use common::{open, provider, records_of, seed, session};
use lexicon_core::constants::META_USER_ID;
use lexicon_core::{IUserDb, IUserDbProvider};
use lexicon_sync::text_format::{self, parse_line, resolve_commits, ImportRow, EXPORT_BANNER};

fn data_rows(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// EXPORT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn export_skips_tombstones() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    seed(&provider, "luna", Some("laptop"), 3, &[("a \t阿", "c=-1 d=0 t=3"), ("b \t不", "c=3 d=1 t=3")]);

    let mut out = Vec::new();
    let rows = text_format::export_to_writer(&open(&provider, "luna"), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(rows, 1);
    assert_eq!(data_rows(&output), vec!["不\tb\t3"]);
}

#[test]
fn export_header_names_store() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    seed(&provider, "luna", Some("laptop"), 7, &[]);

    let mut out = Vec::new();
    text_format::export_to_writer(&open(&provider, "luna"), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    let header: Vec<&str> = output.lines().take(4).collect();

    assert_eq!(
        header,
        vec![EXPORT_BANNER, "# db_name: luna", "# user_id: laptop", "# tick: 7"]
    );
}

#[test]
fn export_skips_unsplittable_keys() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    seed(&provider, "luna", None, 1, &[(" \t空", "c=1 d=0 t=0"), ("two \ttabs\there", "c=1 d=0 t=0")]);

    let mut out = Vec::new();
    let rows = text_format::export_to_writer(&open(&provider, "luna"), &mut out).unwrap();
    assert_eq!(rows, 0);
}

#[test]
fn export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    seed(&provider, "luna", Some("laptop"), 2, &[("ni hao \t你好", "c=4 d=1 t=2")]);
    let file = dir.path().join("luna.txt");

    let rows = text_format::export(&provider, "luna", &file).unwrap();

    assert_eq!(rows, 1);
    let output = std::fs::read_to_string(&file).unwrap();
    assert_eq!(data_rows(&output), vec!["你好\tni hao\t4"]);
}

#[test]
fn export_of_foreign_store_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    seed(&provider, "luna", None, 1, &[]);
    open(&provider, "luna")
        .update(lexicon_core::constants::META_DB_TYPE, "table")
        .unwrap();
    let file = dir.path().join("luna.txt");

    assert!(text_format::export(&provider, "luna", &file).is_err());
    assert!(!file.exists());
}

#[test]
fn export_of_missing_store_fails() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    let file = dir.path().join("ghost.txt");

    assert!(text_format::export(&provider, "ghost", &file).is_err());
    assert!(!file.exists());
    assert!(!provider.user_db("ghost").exists());
}

// ═══════════════════════════════════════════════════════════════════════════
// IMPORT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn positive_delta_after_tombstone_restores_entry() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    let db = open(&provider, "luna");

    text_format::import_from_reader(&db, Cursor::new("hello\tni hao\t-1\n")).unwrap();
    assert_eq!(
        lexicon_core::codec::unpack_value(&db.fetch("ni hao \thello").unwrap().unwrap()).commits,
        -1
    );
    text_format::import_from_reader(&db, Cursor::new("hello\tni hao\t5\n")).unwrap();
    drop(db);

    assert_eq!(records_of(&provider, "luna")["ni hao \thello"].commits, 5);
}

#[test]
fn import_keeps_weight_and_tick() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    seed(&provider, "luna", None, 9, &[("ni \t你", "c=6 d=2.5 t=9")]);

    let db = open(&provider, "luna");
    text_format::import_from_reader(&db, Cursor::new("你\tni\t2\n")).unwrap();
    drop(db);

    let value = records_of(&provider, "luna")["ni \t你"];
    assert_eq!((value.commits, value.weight, value.tick), (6, 2.5, 9));
}

#[test]
fn malformed_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    let db = open(&provider, "luna");
    let input = "# comment\n\nonlyone\n\tcode\ntext\t\nblank\t   \n你好\tni   hao\tabc\n";

    let count = text_format::import_from_reader(&db, Cursor::new(input)).unwrap();
    drop(db);

    assert_eq!(count, 1);
    let records = records_of(&provider, "luna");
    assert_eq!(records.keys().collect::<Vec<_>>(), vec!["ni hao \t你好"]);
    assert_eq!(records["ni hao \t你好"].commits, 0);
}

#[test]
fn invalid_utf8_line_does_not_stop_import() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    let db = open(&provider, "luna");
    let mut input = b"a\tka\t1\n".to_vec();
    input.extend_from_slice(b"\xff\xfe\tbad\t1\n");
    input.extend_from_slice(b"b\tkb\t1\r\n");

    let count = text_format::import_from_reader(&db, Cursor::new(input)).unwrap();
    drop(db);

    assert_eq!(count, 2);
    let records = records_of(&provider, "luna");
    assert_eq!(records.keys().collect::<Vec<_>>(), vec!["ka \ta", "kb \tb"]);
}

#[test]
fn import_stamps_identity_only_when_absent() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    let file = dir.path().join("in.txt");
    std::fs::write(&file, "你\tni\t1\n").unwrap();

    assert_eq!(text_format::import(&provider, "fresh", &file, &session("laptop")).unwrap(), 1);
    let fresh = open(&provider, "fresh");
    assert_eq!(fresh.fetch(META_USER_ID).unwrap().as_deref(), Some("laptop"));

    seed(&provider, "owned", Some("desktop"), 1, &[]);
    text_format::import(&provider, "owned", &file, &session("laptop")).unwrap();
    let owned = open(&provider, "owned");
    assert_eq!(owned.fetch(META_USER_ID).unwrap().as_deref(), Some("desktop"));
}

#[test]
fn import_of_missing_file_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let provider = provider(dir.path());
    let missing = dir.path().join("missing.txt");

    assert!(text_format::import(&provider, "luna", &missing, &session("me")).is_err());
    assert!(!provider.user_db("luna").exists());
}

#[test]
fn export_then_import_reproduces_entries() {
    let from_dir = tempfile::tempdir().unwrap();
    let to_dir = tempfile::tempdir().unwrap();
    let from = provider(from_dir.path());
    let to = provider(to_dir.path());
    seed(
        &from,
        "luna",
        Some("laptop"),
        4,
        &[
            ("ni hao \t你好", "c=3 d=1 t=4"),
            ("zhong guo \t中国", "c=12 d=0.5 t=2"),
            ("shan \t删", "c=-1 d=0 t=4"),
        ],
    );
    let file = from_dir.path().join("luna.txt");

    text_format::export(&from, "luna", &file).unwrap();
    text_format::import(&to, "luna", &file, &session("desktop")).unwrap();

    let imported: Vec<(String, i32)> = records_of(&to, "luna")
        .into_iter()
        .map(|(key, value)| (key, value.commits))
        .collect();
    assert_eq!(
        imported,
        vec![("ni hao \t你好".to_string(), 3), ("zhong guo \t中国".to_string(), 12)]
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// LINE RULES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn parse_line_collapses_code_whitespace() {
    assert_eq!(
        parse_line("你好\t ni   hao \t3"),
        Some(ImportRow {
            text: "你好".to_string(),
            code: "ni hao".to_string(),
            delta: 3,
        })
    );
    assert_eq!(parse_line("你好\tni hao").map(|row| row.delta), Some(0));
    assert_eq!(parse_line("你好\tni hao\tmany").map(|row| row.delta), Some(0));
    assert_eq!(parse_line("你好"), None);
}

#[test]
fn commit_resolution() {
    assert_eq!(resolve_commits(5, -1), 5);
    assert_eq!(resolve_commits(2, 7), 7);
    assert_eq!(resolve_commits(-1, 7), -1);
    assert_eq!(resolve_commits(0, 7), 7);
}

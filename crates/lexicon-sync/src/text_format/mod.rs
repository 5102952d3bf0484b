//! Tab-separated text interchange format.
//!
//! ```text
//! # Lexicon user dictionary export
//! # db_name: luna_pinyin
//! # user_id: 5f0c...
//! # tick: 42
//!
//! 你好	ni hao	3
//! ```
//!
//! Each row is `text<TAB>code<TAB>commits`. Lines starting with `#` are comments.

pub mod export;
pub mod import;

pub use export::{export, export_to_writer};
pub use import::{import, import_from_reader, parse_line, resolve_commits, ImportRow};

/// First line of every export.
pub const EXPORT_BANNER: &str = "# Lexicon user dictionary export";

//! Keyset-paginated cursor over the `entries` table.

use std::collections::VecDeque;

use rusqlite::Connection;

use lexicon_core::errors::LexiconResult;

use crate::queries::entry_ops;

/// Rows fetched per round trip.
pub const DEFAULT_PAGE_SIZE: usize = 512;

/// Iterates every entry whose key starts with a prefix, in key order.
///
/// Pages are fetched lazily, each resuming strictly after the last key
/// returned, so the order is stable and writes to other stores during
/// iteration are harmless.
pub struct EntryCursor<'a> {
    conn: &'a Connection,
    prefix: String,
    last_key: Option<String>,
    buffer: VecDeque<(String, String)>,
    page_size: usize,
    exhausted: bool,
}

impl<'a> EntryCursor<'a> {
    pub fn new(conn: &'a Connection, prefix: &str) -> Self {
        Self::with_page_size(conn, prefix, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(conn: &'a Connection, prefix: &str, page_size: usize) -> Self {
        Self {
            conn,
            prefix: prefix.to_string(),
            last_key: None,
            buffer: VecDeque::new(),
            page_size: page_size.max(1),
            exhausted: false,
        }
    }

    fn fill(&mut self) -> LexiconResult<()> {
        let page = entry_ops::scan_page(
            self.conn,
            &self.prefix,
            self.last_key.as_deref(),
            self.page_size,
        )?;
        if page.len() < self.page_size {
            self.exhausted = true;
        }
        self.buffer.extend(page);
        Ok(())
    }
}

impl Iterator for EntryCursor<'_> {
    type Item = LexiconResult<(String, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buffer.is_empty() && !self.exhausted {
            if let Err(e) = self.fill() {
                self.exhausted = true;
                return Some(Err(e));
            }
        }
        let (key, value) = self.buffer.pop_front()?;
        // Keys are sorted, so the first key outside the prefix ends the range.
        if !key.starts_with(&self.prefix) {
            self.buffer.clear();
            self.exhausted = true;
            return None;
        }
        self.last_key = Some(key.clone());
        Some(Ok((key, value)))
    }
}

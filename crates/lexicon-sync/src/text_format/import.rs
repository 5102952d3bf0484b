use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use lexicon_core::codec::{make_key, pack_value, unpack_value};
use lexicon_core::constants::META_USER_ID;
use lexicon_core::errors::{LexiconError, LexiconResult, SyncError};
use lexicon_core::models::metadata::is_user_db;
use lexicon_core::{IUserDb, IUserDbProvider, RecordValue, UserId};

/// One parsed row of the text format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    pub text: String,
    /// Code with whitespace runs collapsed to single spaces.
    pub code: String,
    /// Signed commit delta; 0 when absent or unparsable.
    pub delta: i32,
}

/// Parse a data line. `None` for lines missing a non-empty text or code.
pub fn parse_line(line: &str) -> Option<ImportRow> {
    let mut fields = line.split('\t');
    let text = fields.next()?;
    let code = fields.next()?;
    if text.is_empty() || code.is_empty() {
        return None;
    }
    let code = code.split_whitespace().collect::<Vec<_>>().join(" ");
    if code.is_empty() {
        return None;
    }
    let delta = fields
        .next()
        .and_then(|commits| commits.trim().parse().ok())
        .unwrap_or(0);
    Some(ImportRow {
        text: text.to_string(),
        code,
        delta,
    })
}

/// New commit count for an imported delta against the stored count.
///
/// A positive delta never lowers the count, a negative delta always
/// replaces it (explicit deletion), zero keeps it.
pub fn resolve_commits(delta: i32, current: i32) -> i32 {
    match delta {
        d if d > 0 => d.max(current),
        d if d < 0 => d,
        _ => current,
    }
}

/// Import a text file into `dict_name`, creating the store if needed.
///
/// A store without a recorded user id is stamped with `session`.
pub fn import<P: IUserDbProvider>(
    provider: &P,
    dict_name: &str,
    text_file: &Path,
    session: &UserId,
) -> LexiconResult<usize> {
    let file = File::open(text_file).map_err(|e| LexiconError::io(text_file, e))?;
    let mut db = provider.user_db(dict_name);
    db.open()?;
    if !is_user_db(&db) {
        return Err(SyncError::NotAUserDb {
            name: dict_name.to_string(),
        }
        .into());
    }
    if db.fetch(META_USER_ID)?.is_none() {
        db.update(META_USER_ID, session.as_str())?;
    }
    let entries = import_from_reader(&db, BufReader::new(file))?;
    db.close()?;
    info!(dict_name, entries, file = %text_file.display(), "imported user dict");
    Ok(entries)
}

/// Apply every data line of `reader` to `db`.
///
/// Malformed lines, including lines that are not valid UTF-8, are skipped.
pub fn import_from_reader<D, R>(db: &D, reader: R) -> LexiconResult<usize>
where
    D: IUserDb + ?Sized,
    R: BufRead,
{
    let mut entries = 0;
    for (index, raw) in reader.split(b'\n').enumerate() {
        let mut raw = raw?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let Ok(line) = String::from_utf8(raw) else {
            warn!(line = index + 1, "entry is not valid UTF-8, skipped");
            continue;
        };
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let Some(row) = parse_line(&line) else {
            warn!(line = index + 1, "invalid entry, skipped");
            continue;
        };
        let key = make_key(&row.code, &row.text);
        let current = db
            .fetch(&key)?
            .map(|packed| unpack_value(&packed))
            .unwrap_or_default();
        let value = RecordValue::new(
            resolve_commits(row.delta, current.commits),
            current.weight,
            current.tick,
        );
        db.update(&key, &pack_value(&value))?;
        entries += 1;
    }
    Ok(entries)
}

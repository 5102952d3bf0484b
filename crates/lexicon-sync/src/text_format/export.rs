use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use lexicon_core::codec::decode_entry;
use lexicon_core::errors::{LexiconError, LexiconResult, SyncError};
use lexicon_core::models::metadata::{is_metadata_key, is_user_db};
use lexicon_core::{DictMetadata, IUserDb, IUserDbProvider};

use super::EXPORT_BANNER;

/// Export every live record of `dict_name` to a text file.
///
/// Returns the number of rows written. The file is not touched unless the
/// store opens and validates.
pub fn export<P: IUserDbProvider>(
    provider: &P,
    dict_name: &str,
    text_file: &Path,
) -> LexiconResult<usize> {
    let mut db = provider.user_db(dict_name);
    db.open_read_only()?;
    if !is_user_db(&db) {
        return Err(SyncError::NotAUserDb {
            name: dict_name.to_string(),
        }
        .into());
    }
    let file = File::create(text_file).map_err(|e| LexiconError::io(text_file, e))?;
    let mut out = BufWriter::new(file);
    let rows = export_to_writer(&db, &mut out)?;
    out.flush().map_err(|e| LexiconError::io(text_file, e))?;
    info!(dict_name, rows, file = %text_file.display(), "exported user dict");
    Ok(rows)
}

/// Write the header and one row per live record. Tombstones are left out.
pub fn export_to_writer<D, W>(db: &D, out: &mut W) -> LexiconResult<usize>
where
    D: IUserDb + ?Sized,
    W: Write,
{
    let meta = DictMetadata::load(db)?;
    if !meta.is_user_db() {
        return Err(SyncError::NotAUserDb {
            name: db.name().to_string(),
        }
        .into());
    }
    writeln!(out, "{EXPORT_BANNER}")?;
    writeln!(out, "# db_name: {}", meta.db_name)?;
    writeln!(out, "# user_id: {}", meta.user_id)?;
    writeln!(out, "# tick: {}", meta.tick)?;
    writeln!(out)?;

    let mut rows = 0;
    for record in db.query("")? {
        let (key, packed) = record?;
        if is_metadata_key(&key) {
            continue;
        }
        let Some(entry) = decode_entry(&key, &packed) else {
            continue;
        };
        if entry.value.is_tombstone() {
            continue;
        }
        writeln!(out, "{}\t{}\t{}", entry.text, entry.code, entry.value.commits)?;
        rows += 1;
    }
    Ok(rows)
}

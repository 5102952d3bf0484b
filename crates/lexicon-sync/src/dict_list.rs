//! Discover local user dictionaries by file name.

use std::path::Path;

use tracing::info;

use lexicon_core::constants::USER_DB_FILE_SUFFIX;
use lexicon_core::errors::{LexiconError, LexiconResult};

/// Names of every `<name>.userdb.sqlite` store in `user_data_dir`, sorted.
///
/// Hidden stores (such as the restore working store) are not listed. A
/// missing directory yields an empty list.
pub fn user_dict_list(user_data_dir: &Path) -> LexiconResult<Vec<String>> {
    if !user_data_dir.is_dir() {
        info!(dir = %user_data_dir.display(), "directory does not exist");
        return Ok(Vec::new());
    }
    let entries =
        std::fs::read_dir(user_data_dir).map_err(|e| LexiconError::io(user_data_dir, e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LexiconError::io(user_data_dir, e))?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if let Some(name) = file_name.strip_suffix(USER_DB_FILE_SUFFIX) {
            if !name.is_empty() && !name.starts_with('.') {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

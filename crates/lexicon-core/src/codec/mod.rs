//! Record codec: the textual value triple and the composite `code \ttext` key.

pub mod key;
pub mod value;

pub use key::{make_key, repair_key, split_key, KeyRepair};
pub use value::{pack_value, unpack_value};

use crate::models::UserDictEntry;

/// Decode a stored `(key, value)` pair. `None` if the key does not split.
pub fn decode_entry(key: &str, packed: &str) -> Option<UserDictEntry> {
    let (code, text) = split_key(key)?;
    Some(UserDictEntry {
        code: code.to_string(),
        text: text.to_string(),
        value: unpack_value(packed),
    })
}

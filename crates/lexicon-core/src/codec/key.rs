/// Build the composite key: `code + " \t" + text`.
pub fn make_key(code: &str, text: &str) -> String {
    format!("{code} \t{text}")
}

/// Outcome of inspecting a key read from foreign data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyRepair {
    /// Already well formed.
    Valid(String),
    /// The space before the tab was missing and has been inserted.
    Repaired(String),
    /// No tab, or the tab is the first character.
    Malformed,
}

impl KeyRepair {
    /// The usable key, if any.
    pub fn into_key(self) -> Option<String> {
        match self {
            KeyRepair::Valid(key) | KeyRepair::Repaired(key) => Some(key),
            KeyRepair::Malformed => None,
        }
    }
}

/// Validate a key and restore the mandatory space before its first tab.
pub fn repair_key(key: &str) -> KeyRepair {
    match key.find('\t') {
        None | Some(0) => KeyRepair::Malformed,
        Some(tab) if key[..tab].ends_with(' ') => KeyRepair::Valid(key.to_string()),
        Some(tab) => {
            let mut repaired = String::with_capacity(key.len() + 1);
            repaired.push_str(&key[..tab]);
            repaired.push(' ');
            repaired.push_str(&key[tab..]);
            KeyRepair::Repaired(repaired)
        }
    }
}

/// Split a key into `(code, text)` on its only tab.
///
/// The code loses its trailing separator space. Returns `None` unless the key
/// holds exactly one tab with non-empty parts on both sides.
pub fn split_key(key: &str) -> Option<(&str, &str)> {
    let (code, text) = key.split_once('\t')?;
    if text.contains('\t') {
        return None;
    }
    let code = code.trim();
    if code.is_empty() || text.is_empty() {
        return None;
    }
    Some((code, text))
}

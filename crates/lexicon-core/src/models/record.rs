use serde::{Deserialize, Serialize};

/// Logical clock value. Advances on every synchronization that imports entries.
pub type TickCount = u64;

/// The `(commits, weight, tick)` triple stored for every user dictionary key.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordValue {
    /// Commit count. Negative marks a deleted entry (tombstone).
    pub commits: i32,
    /// Decayed usage weight.
    pub weight: f64,
    /// Tick at which `weight` was last normalized.
    pub tick: TickCount,
}

impl RecordValue {
    pub fn new(commits: i32, weight: f64, tick: TickCount) -> Self {
        Self {
            commits,
            weight,
            tick,
        }
    }

    pub fn is_tombstone(&self) -> bool {
        self.commits < 0
    }
}

/// A decoded user dictionary record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDictEntry {
    /// Space-joined code tokens.
    pub code: String,
    /// Candidate text.
    pub text: String,
    pub value: RecordValue,
}

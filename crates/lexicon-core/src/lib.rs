//! # lexicon-core
//!
//! Foundation crate for Lexicon user dictionary synchronization.
//! Defines the record codec, metadata model, storage traits, errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod codec;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod version;

// Re-export the most commonly used types at the crate root.
pub use config::LexiconConfig;
pub use errors::{LexiconError, LexiconResult};
pub use models::{DictMetadata, RecordValue, TickCount, UserDictEntry, UserId};
pub use traits::{IDecayModel, IUserDb, IUserDbProvider};

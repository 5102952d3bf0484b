//! # lexicon-sync
//!
//! Serverless synchronization of user dictionaries through a shared folder.
//!
//! - [`MergeEngine`]: union merge of a source store into a destination,
//!   resolving each field by max after decaying stale weights
//! - [`snapshot`]: backup to and restore from snapshot files
//! - [`text_format`]: export/import of the tab-separated text format
//! - [`upgrade`]: rebuild of stores written with the legacy key format
//! - [`synchronizer`]: drive restore/backup over every peer folder
//! - [`UserDictManager`]: one entry point tying the above to a store provider
//!
//! ## Guarantees
//!
//! Re-merging the same snapshot changes nothing, and the merged commit
//! counts do not depend on the order in which peers are merged.

pub mod dict_list;
pub mod manager;
pub mod merge;
pub mod snapshot;
pub mod synchronizer;
pub mod text_format;
pub mod upgrade;

pub use manager::UserDictManager;
pub use merge::MergeEngine;
pub use snapshot::WorkingStore;

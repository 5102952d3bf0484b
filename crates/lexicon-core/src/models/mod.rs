pub mod identity;
pub mod metadata;
pub mod record;
pub mod reports;

pub use identity::UserId;
pub use metadata::DictMetadata;
pub use record::{RecordValue, TickCount, UserDictEntry};
pub use reports::{MergeReport, PeerFailure, SyncReport, UpgradeOutcome};

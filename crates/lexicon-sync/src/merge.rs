//! Tick-based union merge of one user dictionary store into another.

use tracing::{debug, info, warn};

use lexicon_core::codec::{pack_value, repair_key, unpack_value, KeyRepair};
use lexicon_core::constants::{META_TICK, META_USER_ID};
use lexicon_core::errors::{LexiconResult, StorageError, SyncError};
use lexicon_core::models::metadata::{is_metadata_key, is_user_db, read_tick, read_user_id};
use lexicon_core::models::MergeReport;
use lexicon_core::{IDecayModel, IUserDb, RecordValue, TickCount, UserId};

/// Merges a source store into a destination store.
///
/// Every field resolves by max: commits, and weights after each side is
/// decayed to its own store tick. Written records carry
/// `max(dest.tick, src.tick)`. Keys only present in the destination are
/// left alone.
pub struct MergeEngine<'a, M: IDecayModel + ?Sized> {
    decay: &'a M,
}

impl<'a, M: IDecayModel + ?Sized> MergeEngine<'a, M> {
    pub fn new(decay: &'a M) -> Self {
        Self { decay }
    }

    /// Merge every record of `source` into `dest`.
    ///
    /// `source` must be a user dictionary and `dest` must be open read-write;
    /// otherwise nothing is written. When at least one entry is merged the
    /// destination's tick and user id are advanced to `tick_max` and `session`.
    pub fn merge<S, D>(&self, source: &S, dest: &D, session: &UserId) -> LexiconResult<MergeReport>
    where
        S: IUserDb + ?Sized,
        D: IUserDb + ?Sized,
    {
        if !is_user_db(source) {
            return Err(SyncError::NotAUserDb {
                name: source.name().to_string(),
            }
            .into());
        }
        if !dest.is_open() {
            return Err(StorageError::NotOpen {
                name: dest.name().to_string(),
            }
            .into());
        }
        if dest.is_read_only() {
            return Err(StorageError::ReadOnly {
                name: dest.name().to_string(),
            }
            .into());
        }

        let tick_left = read_tick(dest)?;
        let tick_right = read_tick(source)?;
        let tick_max = tick_left.max(tick_right);
        let mut report = MergeReport {
            db_name: dest.name().to_string(),
            source_user_id: read_user_id(source)?,
            entries_merged: 0,
            keys_skipped: 0,
            keys_repaired: 0,
            tick: tick_max,
        };

        for record in source.query("")? {
            let (key, packed) = record?;
            if is_metadata_key(&key) {
                continue;
            }
            let key = match repair_key(&key) {
                KeyRepair::Valid(key) => key,
                KeyRepair::Repaired(key) => {
                    report.keys_repaired += 1;
                    key
                }
                KeyRepair::Malformed => {
                    debug!(key = %key.escape_debug(), "skipping malformed key");
                    report.keys_skipped += 1;
                    continue;
                }
            };

            let remote = self.normalize(unpack_value(&packed), tick_right);
            let merged = match dest.fetch(&key)? {
                Some(local) => {
                    let local = self.normalize(unpack_value(&local), tick_left);
                    RecordValue::new(
                        remote.commits.max(local.commits),
                        remote.weight.max(local.weight),
                        tick_max,
                    )
                }
                None => RecordValue::new(remote.commits, remote.weight, tick_max),
            };
            dest.update(&key, &pack_value(&merged))?;
            report.entries_merged += 1;
        }

        if report.entries_merged > 0 {
            let advanced = dest
                .update(META_TICK, &tick_max.to_string())
                .and_then(|()| dest.update(META_USER_ID, session.as_str()));
            if let Err(e) = advanced {
                warn!(db_name = %report.db_name, error = %e, "failed to update tick count");
            }
        }

        info!(
            db_name = %report.db_name,
            entries = report.entries_merged,
            repaired = report.keys_repaired,
            skipped = report.keys_skipped,
            tick = tick_max,
            "total {} entries imported, tick = {}",
            report.entries_merged,
            tick_max
        );
        Ok(report)
    }

    /// Decay a weight recorded before the store's tick up to that tick.
    fn normalize(&self, value: RecordValue, store_tick: TickCount) -> RecordValue {
        if value.tick < store_tick {
            RecordValue {
                weight: self.decay.decay(0, store_tick, value.weight, value.tick),
                ..value
            }
        } else {
            value
        }
    }
}

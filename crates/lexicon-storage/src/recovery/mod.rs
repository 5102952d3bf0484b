//! Snapshot backup/restore and integrity verification.

pub mod backup;
pub mod integrity_check;

pub mod entry_ops;
pub mod maintenance;

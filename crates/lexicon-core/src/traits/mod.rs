mod decay_model;
mod user_db;

pub use decay_model::IDecayModel;
pub use user_db::{IUserDb, IUserDbProvider, RecordCursor};

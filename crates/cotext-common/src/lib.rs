pub mod errors;
pub mod id;

pub use errors::{ConfigError, SyncError};
pub use id::{now_millis, ParticipantId, TabId};

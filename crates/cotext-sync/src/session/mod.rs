//! Per-tab session state and the fold that applies bus messages to it.

mod fold;
mod state;

pub use fold::Outcome;
pub use state::{LocalIdentity, SessionState};

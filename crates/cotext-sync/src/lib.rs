//! Session state synchronization for a tab-local collaborative editor.
//!
//! Every tab owns one [`Synchronizer`]. It folds [`ChannelMessage`]s from
//! other tabs into its [`SessionState`], posts its own changes on a [`Bus`],
//! and redraws the roster, buffer and remote cursor labels through a
//! [`Frontend`].

pub mod bus;
pub mod cursor;
pub mod protocol;
pub mod session;
pub mod synchronizer;
pub mod view;

pub use bus::{Bus, BusInbox, BusPort, Envelope, LocalBus};
pub use cursor::{locate, project, CaretCell, CursorGeometry, LabelLayout};
pub use protocol::{ChannelMessage, Participant};
pub use session::{LocalIdentity, Outcome, SessionState};
pub use synchronizer::Synchronizer;
pub use view::{
    CursorLayer, EditorSurface, Frontend, Label, LabelPosition, MemoryFrontend,
    MonospaceMetrics, NoticeView, Point, RosterView,
};

//! Wire types exchanged between tabs.
//!
//! Every frame on the bus is one JSON-encoded [`ChannelMessage`]. The
//! `type` tag and camelCase field names match what the browser editor
//! posts on its `BroadcastChannel`, so frames from either side decode here.

use cotext_common::{ParticipantId, SyncError};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Participant
// ---------------------------------------------------------------------------

/// A named session identity with a tracked cursor offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: ParticipantId,
    pub nickname: String,
    /// Offset into the shared buffer, in chars.
    pub cursor_position: usize,
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// One broadcast frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChannelMessage {
    /// A tab announces its newly joined participant.
    Join { participant: Participant },

    /// A tab announces its participant is going away.
    #[serde(rename_all = "camelCase")]
    Leave { participant_id: ParticipantId },

    /// The whole buffer, replacing whatever the receiver holds.
    #[serde(rename_all = "camelCase")]
    Content {
        content: String,
        /// Sender, when known. Receivers skip content from their own nickname.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        participant_id: Option<ParticipantId>,
    },

    #[serde(rename_all = "camelCase")]
    CursorPosition {
        participant_id: ParticipantId,
        cursor_position: usize,
    },

    /// Ask every listening tab to answer with `ParticipantsList`.
    GetParticipants,

    /// The responder's full roster. Receivers replace theirs with it.
    ParticipantsList { participants: Vec<Participant> },

    /// Ask joined tabs to answer with their buffer as `Content`.
    GetContent,
}

impl ChannelMessage {
    /// The wire tag, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ChannelMessage::Join { .. } => "join",
            ChannelMessage::Leave { .. } => "leave",
            ChannelMessage::Content { .. } => "content",
            ChannelMessage::CursorPosition { .. } => "cursorPosition",
            ChannelMessage::GetParticipants => "getParticipants",
            ChannelMessage::ParticipantsList { .. } => "participantsList",
            ChannelMessage::GetContent => "getContent",
        }
    }

    pub fn encode(&self) -> Result<String, SyncError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(frame: &str) -> Result<Self, SyncError> {
        Ok(serde_json::from_str(frame)?)
    }
}

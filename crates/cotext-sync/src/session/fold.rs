//! Folding bus messages into [`SessionState`].
//!
//! The fold never touches the bus or the screen. It mutates the state and
//! reports what the caller has to do next in an [`Outcome`].

use cotext_common::ParticipantId;
use tracing::debug;

use crate::protocol::ChannelMessage;

use super::state::{LocalIdentity, SessionState};

/// Side effects requested by one fold step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Status line to show.
    pub notice: Option<String>,
    /// Message to post back on the bus.
    pub reply: Option<ChannelMessage>,
    /// Roster needs redrawing.
    pub roster_changed: bool,
    /// Buffer was overwritten and must be written to the editor.
    pub buffer_changed: bool,
    /// Label of a participant that left.
    pub removed_label: Option<ParticipantId>,
}

impl SessionState {
    /// Apply one message. `local` is `None` until this tab has joined.
    ///
    /// Messages naming unknown participants change nothing. `join` always
    /// appends, even when the id is already on the roster, and
    /// `participantsList` replaces the roster wholesale.
    pub fn apply(&mut self, message: ChannelMessage, local: Option<&LocalIdentity>) -> Outcome {
        let mut outcome = Outcome::default();

        match message {
            ChannelMessage::Join { participant } => {
                outcome.notice = Some(format!("{} joined", participant.nickname));
                self.participants.push(participant);
                outcome.roster_changed = true;
            }
            ChannelMessage::Content {
                content,
                participant_id,
            } => {
                let sender = participant_id
                    .as_ref()
                    .and_then(|id| self.find(id))
                    .map(|p| p.nickname.as_str());
                let from_self = matches!(
                    (sender, local),
                    (Some(sender), Some(local)) if sender == local.nickname
                );
                if from_self {
                    debug!("Ignoring content sent under our own nickname");
                } else {
                    self.content = content;
                    outcome.buffer_changed = true;
                }
            }
            ChannelMessage::Leave { participant_id } => {
                if let Some(gone) = self.remove(&participant_id) {
                    outcome.notice = Some(format!("{} left", gone.nickname));
                    outcome.roster_changed = true;
                    outcome.removed_label = Some(participant_id);
                }
            }
            ChannelMessage::GetParticipants => {
                outcome.reply = Some(ChannelMessage::ParticipantsList {
                    participants: self.participants.clone(),
                });
            }
            ChannelMessage::ParticipantsList { participants } => {
                self.participants = participants;
                outcome.roster_changed = true;
            }
            ChannelMessage::CursorPosition {
                participant_id,
                cursor_position,
            } => {
                self.move_cursor(&participant_id, cursor_position);
            }
            ChannelMessage::GetContent => {
                // A tab that never joined has nothing worth handing out.
                if let Some(local) = local {
                    outcome.reply = Some(ChannelMessage::Content {
                        content: self.content.clone(),
                        participant_id: Some(local.id.clone()),
                    });
                }
            }
        }

        outcome
    }
}

//! The per-tab coordinator.
//!
//! A [`Synchronizer`] is owned by exactly one tab and every method runs to
//! completion. Local actions (join, typing, caret moves, teardown) change
//! the state first and then post; inbound messages are folded and the
//! resulting side effects executed. Posting failures are logged and never
//! roll back local state.

mod render;


use cotext_common::{ParticipantId, SyncError, TabId};
use tracing::{debug, info, warn};

use crate::bus::Bus;
use crate::cursor::LabelLayout;
use crate::protocol::{ChannelMessage, Participant};
use crate::session::{LocalIdentity, Outcome, SessionState};
use crate::view::Frontend;

/// Session state synchronizer for one tab.
pub struct Synchronizer<B, F> {
    tab: TabId,
    bus: B,
    frontend: F,
    layout: LabelLayout,
    state: SessionState,
    local: Option<LocalIdentity>,
    torn_down: bool,
}

impl<B: Bus, F: Frontend> Synchronizer<B, F> {
    pub fn new(tab: TabId, bus: B, frontend: F, layout: LabelLayout) -> Self {
        Self {
            tab,
            bus,
            frontend,
            layout,
            state: SessionState::new(),
            local: None,
            torn_down: false,
        }
    }

    /// Ask the other tabs for their roster and buffer.
    pub fn init(&mut self) -> Result<(), SyncError> {
        debug!(tab = %self.tab, "Requesting roster and content");
        self.bus.post(&ChannelMessage::GetParticipants)?;
        self.bus.post(&ChannelMessage::GetContent)?;
        Ok(())
    }

    /// Join the session as `nickname` with the caret's current offset.
    pub fn join(&mut self, nickname: &str) -> Result<Participant, SyncError> {
        self.join_with_id(ParticipantId::from_clock(), nickname)
    }

    /// [`join`](Self::join) with a caller-chosen id.
    pub fn join_with_id(
        &mut self,
        id: ParticipantId,
        nickname: &str,
    ) -> Result<Participant, SyncError> {
        let nickname = nickname.trim();
        if nickname.is_empty() {
            return Err(SyncError::EmptyNickname);
        }
        if let Some(local) = &self.local {
            return Err(SyncError::AlreadyJoined(local.nickname.clone()));
        }

        let participant = Participant {
            id,
            nickname: nickname.to_string(),
            cursor_position: self.frontend.caret(),
        };
        self.local = Some(LocalIdentity {
            id: participant.id.clone(),
            nickname: participant.nickname.clone(),
        });
        info!(tab = %self.tab, participant = %participant.id, nickname, "Joined");

        let message = ChannelMessage::Join {
            participant: participant.clone(),
        };
        let outcome = self.state.apply(message.clone(), self.local.as_ref());
        self.execute(outcome);
        self.render_cursors();
        self.post(&message);
        Ok(participant)
    }

    /// The user edited the text area: publish the whole buffer, then our caret.
    pub fn on_input(&mut self) {
        let content = self.frontend.text();
        self.state.set_content(content.clone());
        self.post(&ChannelMessage::Content {
            content,
            participant_id: self.local.as_ref().map(|l| l.id.clone()),
        });
        self.publish_caret();
        self.render_cursors();
    }

    /// The caret moved without an edit.
    pub fn on_caret_moved(&mut self) {
        self.publish_caret();
        self.render_cursors();
    }

    /// Fold one message from another tab and redraw.
    pub fn handle(&mut self, message: ChannelMessage) {
        debug!(tab = %self.tab, kind = message.kind(), "Dispatch");
        let outcome = self.state.apply(message, self.local.as_ref());
        self.execute(outcome);
        self.render_cursors();
    }

    /// The tab is closing. Leaves the session once; later calls do nothing.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        let Some(local) = self.local.take() else {
            return;
        };
        self.state.remove(&local.id);
        self.render_roster();
        info!(tab = %self.tab, participant = %local.id, "Leaving");
        self.post(&ChannelMessage::Leave {
            participant_id: local.id,
        });
    }

    pub fn tab(&self) -> TabId {
        self.tab
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn local(&self) -> Option<&LocalIdentity> {
        self.local.as_ref()
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    fn publish_caret(&mut self) {
        let Some(local) = &self.local else {
            return;
        };
        let id = local.id.clone();
        let offset = self.frontend.caret();
        self.state.move_cursor(&id, offset);
        self.post(&ChannelMessage::CursorPosition {
            participant_id: id,
            cursor_position: offset,
        });
    }

    fn execute(&mut self, outcome: Outcome) {
        if let Some(notice) = &outcome.notice {
            self.frontend.show_notice(notice);
        }
        if outcome.buffer_changed {
            self.frontend.set_text(self.state.content());
        }
        if outcome.roster_changed {
            self.render_roster();
        }
        if let Some(id) = &outcome.removed_label {
            self.frontend.remove_label(id);
        }
        if let Some(reply) = &outcome.reply {
            self.post(reply);
        }
    }

    fn post(&self, message: &ChannelMessage) {
        if let Err(e) = self.bus.post(message) {
            warn!(tab = %self.tab, kind = message.kind(), error = %e, "Post failed");
        }
    }
}

use cotext_common::ParticipantId;

use crate::protocol::Participant;

/// Who this tab joined as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalIdentity {
    pub id: ParticipantId,
    pub nickname: String,
}

/// What one tab knows: the roster in arrival order and the whole buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub(crate) participants: Vec<Participant>,
    pub(crate) content: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn nicknames(&self) -> Vec<String> {
        self.participants
            .iter()
            .map(|p| p.nickname.clone())
            .collect()
    }

    /// First participant with `id`. Duplicates can exist; see [`SessionState::apply`].
    pub fn find(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.id == id)
    }

    pub(crate) fn find_mut(&mut self, id: &ParticipantId) -> Option<&mut Participant> {
        self.participants.iter_mut().find(|p| &p.id == id)
    }

    /// Overwrite the buffer with a local edit.
    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// Move a participant's cursor. Returns false if the id is unknown.
    pub fn move_cursor(&mut self, id: &ParticipantId, offset: usize) -> bool {
        match self.find_mut(id) {
            Some(participant) => {
                participant.cursor_position = offset;
                true
            }
            None => false,
        }
    }

    /// Remove the first participant with `id`.
    pub fn remove(&mut self, id: &ParticipantId) -> Option<Participant> {
        let index = self.participants.iter().position(|p| &p.id == id)?;
        Some(self.participants.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(id: &str, nickname: &str) -> Participant {
        Participant {
            id: ParticipantId::from(id),
            nickname: nickname.into(),
            cursor_position: 0,
        }
    }

    #[test]
    fn new_state_is_empty() {
        let state = SessionState::new();
        assert!(state.participants().is_empty());
        assert_eq!(state.content(), "");
    }

    #[test]
    fn move_cursor_on_unknown_id_is_a_no_op() {
        let mut state = SessionState::new();
        state.participants.push(participant("1", "Alice"));
        assert!(!state.move_cursor(&ParticipantId::from("9"), 4));
        assert_eq!(state.participants()[0].cursor_position, 0);
        assert!(state.move_cursor(&ParticipantId::from("1"), 4));
        assert_eq!(state.participants()[0].cursor_position, 4);
    }

    #[test]
    fn remove_takes_only_the_first_match() {
        let mut state = SessionState::new();
        state.participants.push(participant("1", "Alice"));
        state.participants.push(participant("1", "Alice again"));
        let removed = state.remove(&ParticipantId::from("1")).unwrap();
        assert_eq!(removed.nickname, "Alice");
        assert_eq!(state.nicknames(), vec!["Alice again".to_string()]);
        assert!(state.remove(&ParticipantId::from("2")).is_none());
    }
}

//! Projections from session state onto the frontend.

use std::collections::HashSet;

use cotext_common::ParticipantId;

use crate::bus::Bus;
use crate::cursor::project;
use crate::view::Frontend;

use super::Synchronizer;

impl<B: Bus, F: Frontend> Synchronizer<B, F> {
    pub(super) fn render_roster(&mut self) {
        let nicknames = self.state.nicknames();
        self.frontend.show_roster(&nicknames);
    }

    /// Redraw every remote cursor label and prune labels nobody owns anymore.
    pub(super) fn render_cursors(&mut self) {
        let own = self.local.as_ref().map(|l| &l.id);
        let wanted: HashSet<&ParticipantId> = self
            .state
            .participants()
            .iter()
            .map(|p| &p.id)
            .filter(|id| Some(*id) != own)
            .collect();

        for id in self.frontend.label_ids() {
            if !wanted.contains(&id) {
                self.frontend.remove_label(&id);
            }
        }

        let origin = self.frontend.origin();
        let text = self.state.content();
        for participant in self.state.participants() {
            if Some(&participant.id) == own {
                continue;
            }
            let geometry = project(
                text,
                participant.cursor_position,
                origin,
                &self.layout,
                |s| self.frontend.text_width(s),
            );
            self.frontend
                .place_label(&participant.id, &participant.nickname, geometry.position);
        }
    }
}

//! In-memory frontend used by the console host and by tests.

use std::collections::BTreeMap;

use cotext_common::ParticipantId;
use cotext_config::LayoutConfig;
use unicode_width::UnicodeWidthStr;

use super::{CursorLayer, EditorSurface, LabelPosition, NoticeView, Point, RosterView};

/// Width measurement for a fixed-pitch font: display columns times cell width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub cell_width: f64,
}

impl MonospaceMetrics {
    pub fn width(&self, text: &str) -> f64 {
        text.width() as f64 * self.cell_width
    }
}

/// A placed cursor label.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub nickname: String,
    pub position: LabelPosition,
}

/// Frontend that keeps everything it is told in plain fields.
#[derive(Debug, Clone)]
pub struct MemoryFrontend {
    text: String,
    caret: usize,
    origin: Point,
    metrics: MonospaceMetrics,
    roster: Vec<String>,
    notice: Option<String>,
    labels: BTreeMap<ParticipantId, Label>,
}

impl MemoryFrontend {
    pub fn new(origin: Point, metrics: MonospaceMetrics) -> Self {
        Self {
            text: String::new(),
            caret: 0,
            origin,
            metrics,
            roster: Vec::new(),
            notice: None,
            labels: BTreeMap::new(),
        }
    }

    pub fn from_layout(layout: &LayoutConfig) -> Self {
        Self::new(
            Point {
                x: layout.origin_x,
                y: layout.origin_y,
            },
            MonospaceMetrics {
                cell_width: layout.cell_width,
            },
        )
    }

    /// Replace the text as if the user typed it, leaving the caret at the end.
    pub fn type_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.caret = self.text.chars().count();
    }

    /// Move the caret, clamped to the buffer.
    pub fn set_caret(&mut self, offset: usize) {
        self.caret = offset.min(self.text.chars().count());
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn labels(&self) -> &BTreeMap<ParticipantId, Label> {
        &self.labels
    }

    pub fn label(&self, id: &ParticipantId) -> Option<&Label> {
        self.labels.get(id)
    }
}

impl EditorSurface for MemoryFrontend {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.caret = self.caret.min(self.text.chars().count());
    }

    fn origin(&self) -> Point {
        self.origin
    }

    fn text_width(&self, text: &str) -> f64 {
        self.metrics.width(text)
    }
}

impl RosterView for MemoryFrontend {
    fn show_roster(&mut self, nicknames: &[String]) {
        self.roster = nicknames.to_vec();
    }
}

impl NoticeView for MemoryFrontend {
    fn show_notice(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }
}

impl CursorLayer for MemoryFrontend {
    fn label_ids(&self) -> Vec<ParticipantId> {
        self.labels.keys().cloned().collect()
    }

    fn place_label(&mut self, id: &ParticipantId, nickname: &str, position: LabelPosition) {
        // The label text is fixed when the label is first created.
        self.labels
            .entry(id.clone())
            .or_insert_with(|| Label {
                nickname: nickname.to_string(),
                position,
            })
            .position = position;
    }

    fn remove_label(&mut self, id: &ParticipantId) {
        self.labels.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frontend() -> MemoryFrontend {
        MemoryFrontend::new(Point::default(), MonospaceMetrics { cell_width: 8.0 })
    }

    #[test]
    fn monospace_width_counts_display_columns() {
        let metrics = MonospaceMetrics { cell_width: 8.0 };
        assert_eq!(metrics.width(""), 0.0);
        assert_eq!(metrics.width("abc"), 24.0);
        // Wide CJK glyphs take two cells.
        assert_eq!(metrics.width("안녕"), 32.0);
    }

    #[test]
    fn type_text_moves_caret_to_end() {
        let mut fe = frontend();
        fe.type_text("héllo");
        assert_eq!(fe.text(), "héllo");
        assert_eq!(fe.caret(), 5);
    }

    #[test]
    fn set_text_clamps_caret() {
        let mut fe = frontend();
        fe.type_text("hello world");
        fe.set_text("hi");
        assert_eq!(fe.caret(), 2);
    }

    #[test]
    fn set_caret_clamps_to_buffer() {
        let mut fe = frontend();
        fe.type_text("abc");
        fe.set_caret(99);
        assert_eq!(fe.caret(), 3);
        fe.set_caret(1);
        assert_eq!(fe.caret(), 1);
    }

    #[test]
    fn labels_keep_their_first_nickname() {
        let mut fe = frontend();
        let id = ParticipantId::from("7");
        fe.place_label(&id, "Bob", LabelPosition { left: 1.0, top: 2.0 });
        fe.place_label(&id, "Robert", LabelPosition { left: 3.0, top: 4.0 });

        let label = fe.label(&id).unwrap();
        assert_eq!(label.nickname, "Bob");
        assert_eq!(label.position, LabelPosition { left: 3.0, top: 4.0 });

        fe.remove_label(&id);
        assert!(fe.label_ids().is_empty());
    }

    #[test]
    fn from_layout_uses_origin_and_cell_width() {
        let layout = LayoutConfig {
            origin_x: 10.0,
            origin_y: 30.0,
            cell_width: 7.0,
            ..LayoutConfig::default()
        };
        let fe = MemoryFrontend::from_layout(&layout);
        assert_eq!(fe.origin(), Point { x: 10.0, y: 30.0 });
        assert_eq!(fe.text_width("ab"), 14.0);
    }
}

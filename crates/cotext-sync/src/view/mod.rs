//! Display surfaces the synchronizer draws on.
//!
//! These are the seams to whatever actually shows the editor. The
//! synchronizer only reads the buffer, caret and font metrics from the
//! editor surface and writes projections of its state back.

mod memory;

pub use memory::{Label, MemoryFrontend, MonospaceMetrics};

use cotext_common::ParticipantId;

/// A point in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Where a cursor label's box goes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LabelPosition {
    pub left: f64,
    pub top: f64,
}

/// The text area.
pub trait EditorSurface {
    fn text(&self) -> String;
    /// Caret offset in chars.
    fn caret(&self) -> usize;
    fn set_text(&mut self, text: &str);
    /// Top-left corner of the text area.
    fn origin(&self) -> Point;
    /// Rendered width of `text` in the text area's font.
    fn text_width(&self, text: &str) -> f64;
}

/// The participant list.
pub trait RosterView {
    fn show_roster(&mut self, nicknames: &[String]);
}

/// The one-line status notice.
pub trait NoticeView {
    fn show_notice(&mut self, message: &str);
}

/// Floating labels marking remote cursors, keyed by participant.
pub trait CursorLayer {
    fn label_ids(&self) -> Vec<ParticipantId>;
    /// Create the label if missing, then move it.
    fn place_label(&mut self, id: &ParticipantId, nickname: &str, position: LabelPosition);
    fn remove_label(&mut self, id: &ParticipantId);
}

/// Everything a tab renders to.
pub trait Frontend: EditorSurface + RosterView + NoticeView + CursorLayer {}

impl<T: EditorSurface + RosterView + NoticeView + CursorLayer> Frontend for T {}

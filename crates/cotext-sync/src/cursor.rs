//! Projects a participant's buffer offset to where its label is drawn.

use cotext_config::LayoutConfig;

use crate::view::{LabelPosition, Point};

/// Zero-based row and column of a caret, in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretCell {
    pub row: usize,
    pub column: usize,
}

/// Fixed label geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelLayout {
    pub line_height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self::from(&LayoutConfig::default())
    }
}

impl From<&LayoutConfig> for LabelLayout {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            line_height: config.line_height,
            offset_x: config.label_offset_x,
            offset_y: config.label_offset_y,
        }
    }
}

/// Result of projecting one cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorGeometry {
    pub cell: CaretCell,
    pub position: LabelPosition,
}

/// Row and column of `offset` in `text`.
///
/// Offsets past the end are clamped, so a cursor that raced ahead of a
/// shorter buffer lands on the last row instead of failing.
pub fn locate(text: &str, offset: usize) -> CaretCell {
    scan(text, offset).0
}

/// Label position for a cursor at `offset`.
///
/// `measure` returns the rendered width of a piece of the cursor's row.
pub fn project(
    text: &str,
    offset: usize,
    origin: Point,
    layout: &LabelLayout,
    measure: impl Fn(&str) -> f64,
) -> CursorGeometry {
    let (cell, row_start, caret_byte) = scan(text, offset);
    let width = measure(&text[row_start..caret_byte]);

    CursorGeometry {
        cell,
        position: LabelPosition {
            left: origin.x + width + layout.offset_x,
            top: origin.y + cell.row as f64 * layout.line_height - layout.offset_y,
        },
    }
}

/// Returns the cell plus the byte range of the row text before the caret.
fn scan(text: &str, offset: usize) -> (CaretCell, usize, usize) {
    let mut row = 0;
    let mut row_start = 0;
    let mut caret_byte = text.len();

    for (index, (byte, ch)) in text.char_indices().enumerate() {
        if index == offset {
            caret_byte = byte;
            break;
        }
        if ch == '\n' {
            row += 1;
            row_start = byte + 1;
        }
    }

    let column = text[row_start..caret_byte].chars().count();
    (CaretCell { row, column }, row_start, caret_byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(text: &str) -> f64 {
        text.chars().count() as f64 * 10.0
    }

    #[test]
    fn second_row_column_one() {
        assert_eq!(locate("ab\ncd", 4), CaretCell { row: 1, column: 1 });
    }

    #[test]
    fn offset_right_after_newline_is_column_zero() {
        assert_eq!(locate("ab\ncd", 3), CaretCell { row: 1, column: 0 });
        // On the newline itself the caret is still at the end of row 0.
        assert_eq!(locate("ab\ncd", 2), CaretCell { row: 0, column: 2 });
    }

    #[test]
    fn empty_buffer() {
        assert_eq!(locate("", 0), CaretCell { row: 0, column: 0 });
        assert_eq!(locate("", 12), CaretCell { row: 0, column: 0 });
    }

    #[test]
    fn offset_past_end_is_clamped() {
        assert_eq!(locate("ab\ncd", 50), CaretCell { row: 1, column: 2 });
        assert_eq!(locate("ab\n", 50), CaretCell { row: 1, column: 0 });
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(locate("é\nñü", 3), CaretCell { row: 1, column: 1 });
    }

    #[test]
    fn project_applies_offsets_and_line_height() {
        let layout = LabelLayout::default();
        let origin = Point { x: 100.0, y: 50.0 };

        let geometry = project("ab\ncd", 4, origin, &layout, cells);
        assert_eq!(geometry.cell, CaretCell { row: 1, column: 1 });
        // "c" is 10px wide.
        assert_eq!(geometry.position.left, 100.0 + 10.0 + 5.0);
        assert_eq!(geometry.position.top, 50.0 + 16.0 - 20.0);
    }

    #[test]
    fn project_measures_only_the_caret_row() {
        let layout = LabelLayout::default();
        let seen = std::cell::RefCell::new(Vec::new());
        project("first line\nsecond", 15, Point::default(), &layout, |s| {
            seen.borrow_mut().push(s.to_string());
            0.0
        });
        assert_eq!(seen.into_inner(), vec!["seco".to_string()]);
    }

    #[test]
    fn project_on_first_row_sits_above_origin() {
        let layout = LabelLayout::default();
        let geometry = project("hello", 5, Point::default(), &layout, cells);
        assert_eq!(geometry.cell, CaretCell { row: 0, column: 5 });
        assert_eq!(geometry.position, LabelPosition { left: 55.0, top: -20.0 });
    }

    #[test]
    fn layout_from_config() {
        let config = LayoutConfig {
            line_height: 20.0,
            label_offset_x: 2.0,
            label_offset_y: 18.0,
            ..LayoutConfig::default()
        };
        let layout = LabelLayout::from(&config);
        assert_eq!(layout.line_height, 20.0);
        assert_eq!(layout.offset_x, 2.0);
        assert_eq!(layout.offset_y, 18.0);
    }
}

//! Editor surface geometry used to place remote cursor labels.

use serde::{Deserialize, Serialize};

/// Cursor label layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of one text row in pixels (valid range: 4.0-200.0).
    pub line_height: f64,
    /// Added to the label's left edge (valid range: -200.0-200.0).
    pub label_offset_x: f64,
    /// Subtracted from the label's top edge so it sits above the row
    /// (valid range: -200.0-200.0).
    pub label_offset_y: f64,
    /// Width of one monospace cell in pixels (valid range: 1.0-100.0).
    pub cell_width: f64,
    /// Left edge of the editor surface (valid range: 0.0-10000.0).
    pub origin_x: f64,
    /// Top edge of the editor surface (valid range: 0.0-10000.0).
    pub origin_y: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            line_height: 16.0,
            label_offset_x: 5.0,
            label_offset_y: 20.0,
            cell_width: 8.0,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }
}

//! Layout configuration validation (row height, label offsets, cell width, origin).

use crate::schema::CotextConfig;

use super::helpers::validate_range_f64;

/// Validate all layout-related constraints.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &CotextConfig) {
    let layout = &config.layout;
    validate_range_f64(errors, "layout.line_height", layout.line_height, 4.0, 200.0);
    validate_range_f64(
        errors,
        "layout.label_offset_x",
        layout.label_offset_x,
        -200.0,
        200.0,
    );
    validate_range_f64(
        errors,
        "layout.label_offset_y",
        layout.label_offset_y,
        -200.0,
        200.0,
    );
    validate_range_f64(errors, "layout.cell_width", layout.cell_width, 1.0, 100.0);
    validate_range_f64(errors, "layout.origin_x", layout.origin_x, 0.0, 10000.0);
    validate_range_f64(errors, "layout.origin_y", layout.origin_y, 0.0, 10000.0);
}

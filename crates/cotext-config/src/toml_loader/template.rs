//! Commented default config written on first run.

pub(super) fn default_config_toml() -> &'static str {
    r##"# Cotext Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[channel]
# name = "simple_web_text_editor"   # tabs only see tabs on the same channel
# capacity = 256                    # 1-65536 frames buffered per tab

[layout]
# line_height = 16.0      # 4.0-200.0
# label_offset_x = 5.0    # -200.0-200.0
# label_offset_y = 20.0   # -200.0-200.0
# cell_width = 8.0        # 1.0-100.0
# origin_x = 0.0
# origin_y = 0.0

[logging]
# level = "INFO"          # TRACE, DEBUG, INFO, WARNING, ERROR
"##
}

//! Configuration schema types for Cotext.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the values the browser editor used.

mod channel;
mod layout;
mod system;

pub use channel::*;
pub use layout::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Cotext.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct CotextConfig {
    pub channel: ChannelConfig,
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_correct_channel() {
        let config = CotextConfig::default();
        assert_eq!(config.channel.name, "simple_web_text_editor");
        assert_eq!(config.channel.capacity, 256);
    }

    #[test]
    fn default_config_has_correct_layout() {
        let config = CotextConfig::default();
        assert_eq!(config.layout.line_height, 16.0);
        assert_eq!(config.layout.label_offset_x, 5.0);
        assert_eq!(config.layout.label_offset_y, 20.0);
        assert_eq!(config.layout.cell_width, 8.0);
        assert_eq!(config.layout.origin_x, 0.0);
        assert_eq!(config.layout.origin_y, 0.0);
    }

    #[test]
    fn default_config_has_correct_logging() {
        let config = CotextConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.level.directive(), "info");
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: CotextConfig = toml::from_str(
            r#"
[layout]
line_height = 20.0
"#,
        )
        .unwrap();
        assert_eq!(config.layout.line_height, 20.0);
        assert_eq!(config.layout.label_offset_x, 5.0);
        assert_eq!(config.channel.name, "simple_web_text_editor");
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: CotextConfig = toml::from_str("[logging]\nlevel = \"DEBUG\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.directive(), "debug");
    }
}

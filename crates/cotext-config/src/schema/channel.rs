use serde::{Deserialize, Serialize};

/// Broadcast channel shared by all tabs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Logical channel name; tabs only talk to tabs on the same name.
    pub name: String,
    /// Frames buffered per tab before a slow tab starts losing them (1-65536).
    pub capacity: u32,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            name: "simple_web_text_editor".into(),
            capacity: 256,
        }
    }
}

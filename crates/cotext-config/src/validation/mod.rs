//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod layout;


use crate::schema::CotextConfig;
use cotext_common::ConfigError;

use helpers::validate_range;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CotextConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_channel(&mut errors, config);
    layout::validate_layout(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_channel(errors: &mut Vec<String>, config: &CotextConfig) {
    if config.channel.name.trim().is_empty() {
        errors.push("channel.name must not be empty".into());
    }
    validate_range(errors, "channel.capacity", config.channel.capacity, 1, 65536);
}

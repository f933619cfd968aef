//! Cotext configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cotext_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("joining channel {}", config.channel.name);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ChannelConfig, CotextConfig, LayoutConfig, LogLevel, LoggingConfig};

use std::path::Path;

use cotext_common::ConfigError;

/// Load config from `path` if given, otherwise from the platform default path.
///
/// The default path gets a commented template written to it when missing.
pub fn load_config(path: Option<&Path>) -> Result<CotextConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cotext.toml");
        std::fs::write(&path, "[channel]\nname = \"notes\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.channel.name, "notes");
    }

    #[test]
    fn load_config_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}

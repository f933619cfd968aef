//! Where the config file lives, and seeding it on first run.

use std::fs;
use std::path::{Path, PathBuf};

use cotext_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "cotext";
const FILE_NAME: &str = "config.toml";

/// `<platform config dir>/cotext/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| config_path_in(&base))
        .ok_or(ConfigError::NoConfigDir)
}

/// The config file location under an arbitrary base directory.
pub(crate) fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(FILE_NAME)
}

/// Write the commented template to `path`, creating missing parents.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| io_error(parent, source))?;
    }
    fs::write(path, default_config_toml()).map_err(|source| io_error(path, source))?;

    info!(path = %path.display(), "Wrote default config");
    Ok(())
}

pub(crate) fn io_error(path: &Path, source: std::io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}

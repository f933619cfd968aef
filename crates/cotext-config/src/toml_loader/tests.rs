//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use cotext_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_cotext_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[channel]
name = "scratchpad"

[layout]
line_height = 18.0
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.channel.name, "scratchpad");
    assert_eq!(config.layout.line_height, 18.0);
    // Defaults preserved
    assert_eq!(config.channel.capacity, 256);
    assert_eq!(config.layout.label_offset_y, 20.0);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[layout]
line_height = 1000.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layout.line_height, 16.0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cotext").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.channel.name, "simple_web_text_editor");
    assert_eq!(config.layout.line_height, 16.0);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::CotextConfig;

    let config: CotextConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config.channel.name, "simple_web_text_editor");
}

#[test]
fn create_default_config_reports_unwritable_parent() {
    let dir = tempfile::tempdir().unwrap();
    // A plain file where the config directory should go.
    let blocker = dir.path().join("cotext");
    std::fs::write(&blocker, "").unwrap();
    let path = blocker.join("config.toml");

    let err = create_default_config(&path).unwrap_err();
    match err {
        ConfigError::Io { path: at, .. } => assert_eq!(at, blocker),
        other => panic!("expected an io error, got {other:?}"),
    }
}

#[test]
fn reading_a_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_from_path(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn config_path_lives_under_app_dir() {
    let path = super::paths::config_path_in(Path::new("/home/ada/.config"));
    assert_eq!(path, Path::new("/home/ada/.config/cotext/config.toml"));
}

#[test]
fn default_config_path_is_reasonable() {
    // Headless CI may have no config dir at all.
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("cotext"));
        assert!(path_str.ends_with("config.toml"));
    }
}

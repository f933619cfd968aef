use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("could not determine the platform config directory")]
    NoConfigDir,

    #[error("config io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("nickname must not be empty")]
    EmptyNickname,

    #[error("this tab already joined as {0}")]
    AlreadyJoined(String),

    #[error("bus closed")]
    BusClosed,

    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

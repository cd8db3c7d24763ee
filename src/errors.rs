use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading portfolio content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors raised by the settings load/save helpers.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no usable config directory on this platform")]
    NoConfigDir,
    #[error("settings IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

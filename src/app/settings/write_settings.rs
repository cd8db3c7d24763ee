use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::SettingsError;

/// User-tunable settings persisted as TOML in the config dir. Timing knobs
/// for the carousel live here so they are configuration, not magic numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Starting theme name: "light" or "dark".
    pub theme: String,
    /// Whether the project carousel auto-advances.
    pub autoplay: bool,
    /// Dwell between automatic slide advances, in milliseconds.
    pub autoplay_interval_ms: u64,
    /// Slide transition duration, in milliseconds.
    pub transition_ms: u64,
    /// Optional default content file; CLI `--content` overrides it.
    pub content_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            theme: "light".to_string(),
            autoplay: true,
            autoplay_interval_ms: 3000,
            transition_ms: 500,
            content_path: None,
        }
    }
}

impl Settings {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the settings to an explicit path. Used by `save_settings` and
    /// directly by tests.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

/// Persist settings to `settings.toml` in the project config dir, creating
/// the directory if needed.
pub fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    let dir = super::config_dirs::project_config_dir().ok_or(SettingsError::NoConfigDir)?;
    super::config_dirs::ensure_dirs_exist()?;
    settings.save_to(&dir.join("settings.toml"))
}

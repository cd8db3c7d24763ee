use std::path::Path;

use crate::errors::SettingsError;

use super::write_settings::Settings;

/// Parse settings from a TOML document. Unknown keys are ignored and
/// missing keys fall back to defaults, so old settings files keep working.
pub fn from_toml(s: &str) -> Result<Settings, SettingsError> {
    Ok(toml::from_str(s)?)
}

/// Read settings from an explicit path.
pub fn load_from(path: &Path) -> Result<Settings, SettingsError> {
    let s = std::fs::read_to_string(path)?;
    from_toml(&s)
}

/// Load `settings.toml` from the project config dir. Callers treat any
/// error as "use defaults"; a missing file is the normal first-run case.
pub fn load_settings() -> Result<Settings, SettingsError> {
    let dir = super::config_dirs::project_config_dir().ok_or(SettingsError::NoConfigDir)?;
    load_from(&dir.join("settings.toml"))
}

use std::path::PathBuf;

use directories_next::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "folio")
}

/// Per-user config directory for this app (settings.toml lives here).
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Per-user cache directory; the log file is written here because stdout
/// belongs to the TUI.
pub fn user_cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

/// Create the config and cache directories if they do not exist yet.
pub fn ensure_dirs_exist() -> std::io::Result<()> {
    if let Some(d) = project_config_dir() {
        std::fs::create_dir_all(d)?;
    }
    if let Some(d) = user_cache_dir() {
        std::fs::create_dir_all(d)?;
    }
    Ok(())
}

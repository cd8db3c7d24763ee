pub mod config_dirs;
pub mod keybinds;
pub mod read_settings;
pub mod write_settings;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{ensure_dirs_exist, project_config_dir, user_cache_dir};
pub use read_settings::load_settings;
pub use write_settings::save_settings;
pub use write_settings::Settings;

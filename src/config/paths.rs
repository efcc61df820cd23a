use crate::constants::{env_vars, files};
use std::path::Path;

/// Returns the platform-specific path for the config file.
///
/// # Returns
/// String containing the absolute path to the config file
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(files::APP_DIR)
        .join(files::CONFIG_FILE)
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(files::APP_DIR)
        .join("logs")
        .to_string_lossy()
        .to_string()
}

/// Picks the config file: explicit path, then `ICE_SCRAPER_CONFIG`, then the
/// platform default.
pub fn resolve_config_path(explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| std::env::var(env_vars::CONFIG_PATH).ok())
        .filter(|path| !path.trim().is_empty())
        .unwrap_or_else(get_config_path)
}

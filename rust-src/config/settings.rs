//! Application settings and path constants.

use std::path::{Path, PathBuf};


/// Event poll interval for the interactive dashboard (milliseconds).
pub const TICK_RATE_MS: u64 = 250;

/// Width of text progress bars in the snapshot view.
pub const BAR_WIDTH: usize = 20;

/// Length of the data window ending on the selected date.
pub const WINDOW_DAYS: i64 = 7;

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "GAMEDASH_LOG";


/// Get the dashboard configuration directory.
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gamedash")
}


/// Get the default snapshot data path.
pub fn get_default_data_path() -> PathBuf {
    get_config_dir().join("snapshot.json")
}


/// Get the log file used while the interactive dashboard owns the terminal.
pub fn get_log_path() -> PathBuf {
    get_config_dir().join("gamedash.log")
}


/// Get the default directory for exported images.
pub fn get_export_dir() -> PathBuf {
    get_config_dir().join("exports")
}


/// Pick the snapshot file to load.
///
/// An explicit path always wins. Otherwise the default path is used when it
/// exists, and `None` means the built-in sample dataset.
pub fn resolve_data_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let default = get_default_data_path();
    default.exists().then_some(default)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(TICK_RATE_MS, 250);
        assert_eq!(BAR_WIDTH, 20);
        assert_eq!(WINDOW_DAYS, 7);
    }

    #[test]
    fn test_paths_under_config_dir() {
        let dir = get_config_dir();
        assert!(dir.ends_with("gamedash"));
        assert!(get_default_data_path().starts_with(&dir));
        assert!(get_log_path().to_string_lossy().ends_with("gamedash.log"));
        assert!(get_export_dir().starts_with(&dir));
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = Path::new("/tmp/custom.json");
        assert_eq!(resolve_data_path(Some(path)), Some(path.to_path_buf()));
    }
}

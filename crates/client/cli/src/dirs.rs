//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific log directory
///
/// - macOS: `~/Library/Caches/loadout/logs`
/// - Linux: `~/.cache/loadout/logs` (or `$XDG_CACHE_HOME/loadout/logs`)
/// - Windows: `%LOCALAPPDATA%\loadout\cache\logs`
/// - Fallback: `/tmp/loadout/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "loadout")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/loadout"))
        .join("logs")
}

/// Get the platform-specific data directory holding `config.toml`,
/// `objectives.toml` and `armor.ron`
///
/// - macOS: `~/Library/Application Support/loadout`
/// - Linux: `~/.local/share/loadout` (or `$XDG_DATA_HOME/loadout`)
/// - Windows: `%APPDATA%\loadout\data`
/// - Fallback: `./data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "loadout")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}

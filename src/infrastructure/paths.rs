//! Platform path resolution for persistent files.
//!
//! This module locates the per-user directories Reelscout stores its files
//! in, using the platform conventions exposed by the `dirs` crate. All
//! durable files live under one application directory so they are easy to
//! find and remove.

use std::path::PathBuf;

/// Directory name used under the platform data and config roots.
const APP_DIR: &str = "reelscout";

/// Returns the data directory for Reelscout storage.
///
/// Resolves to `~/.local/share/reelscout` on Linux (and the platform
/// equivalent elsewhere), falling back to a relative `.reelscout` directory
/// when no home directory can be determined. The watchlist file lives within
/// this directory.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from(".reelscout"))
        .join(APP_DIR)
}

/// Returns the configuration directory for Reelscout.
///
/// Resolves to `~/.config/reelscout` on Linux. Holds `config.toml` and the
/// preferences file.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".reelscout"))
        .join(APP_DIR)
}

/// Path of the durable watchlist file.
#[must_use]
pub fn watchlist_file() -> PathBuf {
    data_dir().join("watchlist.json")
}

/// Path of the persisted display preferences.
#[must_use]
pub fn preferences_file() -> PathBuf {
    config_dir().join("preferences.json")
}

/// Path of the TOML configuration file.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_under_the_app_directory() {
        assert!(watchlist_file().ends_with("reelscout/watchlist.json"));
        assert!(preferences_file().ends_with("reelscout/preferences.json"));
        assert!(config_file().ends_with("reelscout/config.toml"));
    }
}

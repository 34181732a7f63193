//! Persisted user preferences.
//!
//! A single trivial flag (dark mode) kept under its own storage key, separate
//! from the watchlist. Same atomic-write discipline and same tolerance on
//! load: missing or malformed content yields defaults.

use crate::domain::error::{ReelscoutError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current preferences schema version.
const SCHEMA_VERSION: u32 = 1;

/// Persisted presentation preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Schema version for future migrations.
    version: u32,

    /// Dark color scheme toggle. Defaults to on, matching the original app.
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            dark_mode: true,
        }
    }
}

impl Preferences {
    /// Loads preferences from `path`, falling back to defaults when the file
    /// is missing or unreadable.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Self::default();
        };

        serde_json::from_str(&contents)
            .ok()
            .filter(|prefs: &Self| prefs.version == SCHEMA_VERSION)
            .unwrap_or_else(|| {
                tracing::warn!(path = ?path, "preferences unreadable, using defaults");
                Self::default()
            })
    }

    /// Saves preferences to `path` with an atomic replace.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ReelscoutError::Storage(format!("failed to serialize preferences: {e}")))?;

        let tmp_path = path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

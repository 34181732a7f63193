//! JSON file-based watchlist storage backend.
//!
//! Persists the watchlist as a single human-readable JSON file, written
//! atomically (write-to-temp + rename) so a crash mid-write never corrupts
//! the stored value. The payload carries an explicit schema version; the
//! original app persisted a bare unversioned array, which loads here through
//! a one-time migration.

use crate::domain::error::{ReelscoutError, Result};
use crate::domain::MovieSummary;
use crate::storage::backend::WatchlistStorage;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Current persisted schema version.
const SCHEMA_VERSION: u32 = 1;

/// Versioned on-disk envelope for the watchlist.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "movies": [
///     {
///       "id": 27205,
///       "title": "Inception",
///       "poster_path": "/poster.jpg",
///       "release_date": "2010-07-16",
///       "vote_average": 8.4,
///       "popularity": 90.5
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WatchlistPayload {
    /// Schema version for future migrations.
    version: u32,

    /// Saved entries in insertion order.
    #[serde(default)]
    movies: Vec<MovieSummary>,
}

impl Default for WatchlistPayload {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            movies: Vec::new(),
        }
    }
}

/// JSON file watchlist backend.
///
/// Loading tolerates a missing file and malformed content, both of which
/// yield an empty collection; the watchlist is personal-device data and
/// silently starting fresh beats refusing to start.
pub struct JsonWatchlistStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,
}

impl JsonWatchlistStorage {
    /// Creates a backend rooted at `file_path`, creating parent directories
    /// as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directory creation fails.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON watchlist storage");
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self { file_path })
    }

    /// Decodes raw file contents, migrating recognized legacy shapes.
    ///
    /// Accepts the current versioned envelope or the legacy bare array the
    /// original app wrote. Anything else downgrades to empty with a warning.
    fn decode(contents: &str) -> Vec<MovieSummary> {
        if let Ok(payload) = serde_json::from_str::<WatchlistPayload>(contents) {
            return migrate(payload);
        }

        // Legacy format: a bare unversioned array of summaries.
        if let Ok(movies) = serde_json::from_str::<Vec<MovieSummary>>(contents) {
            tracing::debug!(
                entry_count = movies.len(),
                "migrated legacy unversioned watchlist payload"
            );
            return movies;
        }

        tracing::warn!("watchlist payload malformed, starting with empty collection");
        Vec::new()
    }
}

/// Migrates a decoded payload to the current schema.
///
/// Version 1 is current; unknown versions are treated as unreadable and
/// yield an empty collection rather than a best-effort parse.
fn migrate(payload: WatchlistPayload) -> Vec<MovieSummary> {
    match payload.version {
        SCHEMA_VERSION => payload.movies,
        other => {
            tracing::warn!(
                version = other,
                "unknown watchlist schema version, starting with empty collection"
            );
            Vec::new()
        }
    }
}

impl WatchlistStorage for JsonWatchlistStorage {
    fn load(&self) -> Result<Vec<MovieSummary>> {
        let _span = tracing::debug_span!("watchlist_load", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("no stored watchlist, starting empty");
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.file_path)?;
        let movies = Self::decode(&contents);
        tracing::debug!(entry_count = movies.len(), "watchlist loaded");
        Ok(movies)
    }

    fn save(&mut self, movies: &[MovieSummary]) -> Result<()> {
        let _span = tracing::debug_span!("watchlist_save",
            path = ?self.file_path,
            entry_count = movies.len()
        )
        .entered();

        let payload = WatchlistPayload {
            version: SCHEMA_VERSION,
            movies: movies.to_vec(),
        };
        let json = serde_json::to_string_pretty(&payload)
            .map_err(|e| ReelscoutError::Storage(format!("failed to serialize watchlist: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("watchlist saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn movie(id: u64, title: &str) -> MovieSummary {
        MovieSummary {
            id,
            title: title.to_string(),
            poster_path: None,
            release_date: None,
            vote_average: None,
            popularity: None,
        }
    }

    fn storage_in(dir: &TempDir) -> JsonWatchlistStorage {
        JsonWatchlistStorage::new(dir.path().join("watchlist.json")).unwrap()
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut storage = storage_in(&dir);
        let movies = vec![movie(1, "Alien"), movie(2, "Aliens")];

        storage.save(&movies).unwrap();
        assert_eq!(storage.load().unwrap(), movies);
    }

    #[test]
    fn malformed_content_downgrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("watchlist.json");
        std::fs::write(&path, "{not json").unwrap();

        let mut storage = JsonWatchlistStorage::new(path).unwrap();
        assert!(storage.load().unwrap().is_empty());

        // A mutation afterward proceeds normally.
        storage.save(&[movie(3, "Arrival")]).unwrap();
        assert_eq!(storage.load().unwrap().len(), 1);
    }

    #[test]
    fn legacy_bare_array_is_migrated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("watchlist.json");
        std::fs::write(&path, r#"[{"id": 27205, "title": "Inception"}]"#).unwrap();

        let storage = JsonWatchlistStorage::new(path).unwrap();
        let movies = storage.load().unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Inception");
    }

    #[test]
    fn unknown_schema_version_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("watchlist.json");
        std::fs::write(&path, r#"{"version": 99, "movies": [{"id": 1, "title": "X"}]}"#).unwrap();

        let storage = JsonWatchlistStorage::new(path).unwrap();
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let mut storage = storage_in(&dir);
        storage.save(&[movie(1, "Heat")]).unwrap();
        assert!(!dir.path().join("watchlist.tmp").exists());
    }
}

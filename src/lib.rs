//! Reelscout: a movie discovery core with search, filtering, and a
//! persistent watchlist.
//!
//! Reelscout wraps the TMDB catalog in an event-driven client core:
//! - Search and discover listings composed from a single filter state
//! - Genre, release-year, and sort filtering with fuzzy genre lookup
//! - A watchlist persisted to versioned JSON with write-through saves
//! - Monotonic request sequencing so stale fetch results never win
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI Shim (main.rs)                                 │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - Fetch sequencing                                 │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Query Layer   │   │ Storage Layer │   │ Worker Layer  │
//! │ (query/)      │   │ (storage/)    │   │ (worker/)     │
//! │ - Filters     │   │ - JSON I/O    │   │ - Fetch msgs  │
//! │ - Composition │   │ - Watchlist   │   │ - Provider    │
//! │ - Labels      │   │ - Preferences │   │   dispatch    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Movie model (domain/movie)                       │
//! │  - TMDB provider (provider/)                        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (movies, genres, errors)
//! - [`query`]: Filter state and query composition
//! - [`provider`]: Movie catalog providers (TMDB over HTTP)
//! - [`storage`]: JSON file persistence for watchlist and preferences
//! - [`worker`]: Fetch worker bridging the app layer and the provider
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`observability`]: Tracing initialization
//!
//! # Example
//!
//! ```no_run
//! use reelscout::{handle_event, AppState, Event};
//! use reelscout::storage::{JsonWatchlistStorage, WatchlistStore};
//!
//! let mut state = AppState::new();
//! let mut watchlist = WatchlistStore::new(Box::new(JsonWatchlistStorage::new(
//!     reelscout::infrastructure::watchlist_file(),
//! )?));
//!
//! let (_render, _actions) = handle_event(
//!     &mut state,
//!     &mut watchlist,
//!     &Event::SearchInput("inception".to_string()),
//! )?;
//! // Execute actions...
//! # Ok::<(), reelscout::ReelscoutError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod provider;
pub mod query;
pub mod storage;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, NoticeKind, Route};
pub use domain::{Genre, MovieDetails, MovieSummary, ReelscoutError, Result};
pub use query::{compose, FilterState, QueryDescriptor, SortKey};

use serde::Deserialize;
use std::path::Path;

/// Application configuration loaded from `config.toml`.
///
/// All fields are optional in the file; the TMDB API key may also be
/// supplied through the `TMDB_API_KEY` environment variable, which takes
/// precedence over the file.
///
/// # Example
///
/// ```toml
/// # ~/.config/reelscout/config.toml
/// api_key = "0123456789abcdef"
/// language = "en-US"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TMDB API key. Required for any network operation.
    pub api_key: Option<String>,

    /// Override for the TMDB API base URL. Useful for proxies and tests.
    pub base_url: Option<String>,

    /// ISO 639-1 language tag sent with every request. Default: `en-US`.
    pub language: Option<String>,

    /// Tracing filter directive. Options: `trace`, `debug`, `info`, `warn`,
    /// `error`. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Loads configuration from the given TOML file, then applies
    /// environment overrides.
    ///
    /// A missing file yields the defaults rather than an error; a present
    /// but malformed file is reported.
    ///
    /// # Errors
    ///
    /// Returns [`ReelscoutError::Config`] when the file exists but cannot be
    /// read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            toml::from_str(&raw)
                .map_err(|e| ReelscoutError::Config(format!("invalid {}: {e}", path.display())))?
        } else {
            Self::default()
        };

        if let Ok(key) = std::env::var("TMDB_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }

        Ok(config)
    }
}

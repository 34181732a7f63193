//! Storage layer for the persisted watchlist and user preferences.
//!
//! This module provides the persistence abstraction for the user's saved
//! movies. The watchlist is held authoritatively in memory by
//! [`WatchlistStore`] and mirrored to a storage backend after every
//! mutation; backends replace the stored value atomically.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based backend with a versioned payload
//! - `watchlist`: The store owning the in-memory collection
//! - `prefs`: Trivial persisted presentation preferences

pub mod backend;
pub mod json;
pub mod prefs;
pub mod watchlist;

pub use backend::WatchlistStorage;
pub use json::JsonWatchlistStorage;
pub use prefs::Preferences;
pub use watchlist::WatchlistStore;

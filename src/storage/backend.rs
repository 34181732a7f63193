//! Storage backend abstraction for the watchlist.
//!
//! This module defines the [`WatchlistStorage`] trait that abstracts over the
//! durable key-value surface the watchlist is mirrored to. The trait is
//! deliberately minimal: the store keeps the authoritative collection in
//! memory and only ever needs a full load at hydration and a full replace
//! after each mutation.

use crate::domain::error::Result;
use crate::domain::MovieSummary;

/// Abstraction over durable watchlist persistence.
///
/// Implementations must replace the stored value atomically on save so a
/// crash mid-write never leaves a corrupt payload behind.
///
/// # Implementations
///
/// - [`JsonWatchlistStorage`](crate::storage::JsonWatchlistStorage): JSON
///   file with atomic writes (default)
pub trait WatchlistStorage: Send {
    /// Loads the entire persisted collection.
    ///
    /// A missing value yields an empty collection. Implementations downgrade
    /// malformed or unrecognized payloads to an empty collection rather than
    /// erroring; parse failures never escape the storage boundary.
    ///
    /// # Errors
    ///
    /// Returns an error only for hard I/O failures (e.g. permission denied).
    fn load(&self) -> Result<Vec<MovieSummary>>;

    /// Replaces the entire persisted collection with `movies`.
    ///
    /// Called synchronously after every mutation; the write must be a single
    /// atomic replace of the prior value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    fn save(&mut self, movies: &[MovieSummary]) -> Result<()>;
}

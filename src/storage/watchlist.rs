//! The watchlist store: authoritative in-memory collection with write-through
//! persistence.
//!
//! [`WatchlistStore`] owns the user's saved movies. It hydrates once from its
//! storage backend at construction (any load failure downgrades to an empty
//! collection) and re-persists the full collection synchronously after every
//! mutation. Consumers never touch the collection directly; they read it or
//! go through the mutation API.
//!
//! Persistence failures after a mutation are logged but not surfaced: the
//! in-memory change has already taken effect, and losing a write on crash is
//! an accepted trade for personal-device data.

use crate::domain::MovieSummary;
use crate::storage::backend::WatchlistStorage;

/// The authoritative local watchlist.
///
/// Insertion-ordered, unique by movie id. Constructed via [`WatchlistStore::new`],
/// which performs the one-time `Uninitialized → Ready` hydration; the store
/// stays ready for the life of the process. Pass it by reference to whichever
/// components need it rather than holding it in ambient global state.
pub struct WatchlistStore {
    storage: Box<dyn WatchlistStorage>,
    entries: Vec<MovieSummary>,
}

impl WatchlistStore {
    /// Creates the store, hydrating from the given backend.
    ///
    /// A failed load (hard I/O error) is downgraded to an empty collection
    /// with a warning; startup never fails on unreadable watchlist data.
    #[must_use]
    pub fn new(storage: Box<dyn WatchlistStorage>) -> Self {
        let entries = storage.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load watchlist, starting empty");
            Vec::new()
        });

        tracing::debug!(entry_count = entries.len(), "watchlist store ready");
        Self { storage, entries }
    }

    /// Adds a movie snapshot to the end of the watchlist.
    ///
    /// Idempotent: a second add of the same id is a no-op. Returns whether
    /// the collection changed.
    pub fn add(&mut self, movie: MovieSummary) -> bool {
        if self.contains(movie.id) {
            tracing::debug!(movie_id = movie.id, "movie already in watchlist");
            return false;
        }

        tracing::debug!(movie_id = movie.id, title = %movie.title, "adding to watchlist");
        self.entries.push(movie);
        self.persist();
        true
    }

    /// Removes the entry with the given id.
    ///
    /// A miss is a no-op, not an error. Returns whether an entry was removed.
    pub fn remove(&mut self, movie_id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|movie| movie.id != movie_id);

        if self.entries.len() == before {
            tracing::debug!(movie_id, "movie not in watchlist, nothing to remove");
            return false;
        }

        tracing::debug!(movie_id, "removed from watchlist");
        self.persist();
        true
    }

    /// Empties the watchlist unconditionally.
    pub fn clear(&mut self) {
        tracing::debug!(entry_count = self.entries.len(), "clearing watchlist");
        self.entries.clear();
        self.persist();
    }

    /// Pure membership query by movie id.
    #[must_use]
    pub fn contains(&self, movie_id: u64) -> bool {
        self.entries.iter().any(|movie| movie.id == movie_id)
    }

    /// Read-only view of the current collection, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[MovieSummary] {
        &self.entries
    }

    /// Number of saved entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the watchlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-persists the full collection after a mutation.
    ///
    /// Write failures are logged, not returned: the in-memory mutation has
    /// already taken effect and callers see a consistent collection.
    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.entries) {
            tracing::error!(error = %e, "failed to persist watchlist");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{ReelscoutError, Result};
    use crate::storage::json::JsonWatchlistStorage;
    use tempfile::TempDir;

    /// In-memory backend stub; `fail_saves` exercises the lossy-write path.
    #[derive(Default)]
    struct MemoryStorage {
        saved: Vec<MovieSummary>,
        fail_saves: bool,
    }

    impl WatchlistStorage for MemoryStorage {
        fn load(&self) -> Result<Vec<MovieSummary>> {
            Ok(self.saved.clone())
        }

        fn save(&mut self, movies: &[MovieSummary]) -> Result<()> {
            if self.fail_saves {
                return Err(ReelscoutError::Storage("disk full".to_string()));
            }
            self.saved = movies.to_vec();
            Ok(())
        }
    }

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

    #[test]
    fn add_is_idempotent_on_id() {
        let mut store = WatchlistStore::new(Box::new(MemoryStorage::default()));
        assert!(store.add(movie(1, "Alien")));
        assert!(!store.add(movie(1, "Alien")));
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0], movie(1, "Alien"));
    }

    #[test]
    fn remove_missing_is_a_no_op() {
        let mut store = WatchlistStore::new(Box::new(MemoryStorage::default()));
        store.add(movie(1, "Alien"));
        assert!(!store.remove(42));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn contains_tracks_mutations_immediately() {
        // Membership must not depend on persistence completion, so this
        // runs against a backend that rejects every save.
        let storage = MemoryStorage {
            fail_saves: true,
            ..Default::default()
        };
        let mut store = WatchlistStore::new(Box::new(storage));

        assert!(store.add(movie(7, "Heat")));
        assert!(store.contains(7));
        assert!(store.remove(7));
        assert!(!store.contains(7));
    }

    #[test]
    fn mutation_sequence_preserves_insertion_order() {
        let mut store = WatchlistStore::new(Box::new(MemoryStorage::default()));
        store.clear();
        store.add(movie(1, "A"));
        store.add(movie(2, "B"));
        store.remove(1);
        assert_eq!(store.entries(), &[movie(2, "B")]);
    }

    #[test]
    fn rehydration_reproduces_the_collection() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("watchlist.json");

        {
            let storage = JsonWatchlistStorage::new(path.clone()).unwrap();
            let mut store = WatchlistStore::new(Box::new(storage));
            store.clear();
            store.add(movie(1, "A"));
            store.add(movie(2, "B"));
            store.remove(1);
        }

        let storage = JsonWatchlistStorage::new(path).unwrap();
        let store = WatchlistStore::new(Box::new(storage));
        assert_eq!(store.entries(), &[movie(2, "B")]);
    }

    #[test]
    fn clear_empties_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("watchlist.json");

        {
            let storage = JsonWatchlistStorage::new(path.clone()).unwrap();
            let mut store = WatchlistStore::new(Box::new(storage));
            store.add(movie(1, "A"));
            store.clear();
            assert!(store.is_empty());
        }

        let storage = JsonWatchlistStorage::new(path).unwrap();
        assert!(WatchlistStore::new(Box::new(storage)).is_empty());
    }
}

//! Application state and fetch-lifecycle bookkeeping.
//!
//! This module defines [`AppState`], the central state container for the
//! listing view: the filter/search state, the genre list, the last applied
//! result list with its loading/error flags, and the monotonic request
//! sequencing that keeps stale fetch results from overwriting newer ones.
//!
//! # Staleness
//!
//! Every listing fetch is minted a token from a monotonic counter.
//! [`AppState::apply_listing`] only applies a response whose token matches
//! the one currently in flight; anything else is discarded. "Last response
//! wins by arrival order" is exactly the bug this exists to prevent.

use crate::domain::{Genre, MovieDetails, MovieSummary};
use crate::query::{compose, composer, FilterState, QueryDescriptor};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Outcome of a resolved listing fetch, as fed back into the state.
pub type ListingOutcome = std::result::Result<Vec<MovieSummary>, String>;

/// Central application state container.
///
/// Owned by the composing view; mutated only by the event handler. The
/// watchlist is deliberately not in here — it lives in its own store and the
/// two meet only at render time.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current filter/search state. The single input to query composition.
    pub filters: FilterState,

    /// Genre list fetched once at startup. Stays empty if that fetch fails,
    /// which disables genre filtering but nothing else.
    pub genres: Vec<Genre>,

    /// Last applied result list. `None` until the first fetch resolves.
    pub movies: Option<Vec<MovieSummary>>,

    /// Whether a listing fetch is outstanding.
    pub loading: bool,

    /// User-facing message for the last failed listing fetch.
    pub error: Option<String>,

    /// Details record for the currently opened movie, if any.
    pub selected: Option<Box<MovieDetails>>,

    /// User-facing message for a failed details fetch.
    pub detail_error: Option<String>,

    /// Source of listing request tokens. Monotonically increasing.
    next_request: u64,

    /// Token of the listing fetch currently in flight.
    inflight_request: Option<u64>,
}

impl AppState {
    /// Creates an empty state with default filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new listing fetch for the current filter state.
    ///
    /// Mints the next request token, marks it as the only one whose result
    /// will be accepted, raises the loading flag, and clears any previous
    /// error. Returns the token together with the composed query descriptor.
    pub fn begin_listing_fetch(&mut self) -> (u64, QueryDescriptor) {
        self.next_request += 1;
        let token = self.next_request;
        self.inflight_request = Some(token);
        self.loading = true;
        self.error = None;

        let query = compose(&self.filters);
        tracing::debug!(request = token, mode = ?query.mode, "listing fetch started");
        (token, query)
    }

    /// Applies a resolved listing fetch, unless it has been superseded.
    ///
    /// Returns whether the outcome was applied. A response whose token does
    /// not match the in-flight request is stale and leaves state untouched.
    pub fn apply_listing(&mut self, request: u64, outcome: ListingOutcome) -> bool {
        if self.inflight_request != Some(request) {
            tracing::debug!(
                request,
                inflight = ?self.inflight_request,
                "discarding stale listing response"
            );
            return false;
        }

        self.inflight_request = None;
        self.loading = false;
        match outcome {
            Ok(movies) => {
                tracing::debug!(request, result_count = movies.len(), "listing applied");
                self.movies = Some(movies);
                self.error = None;
            }
            Err(message) => {
                tracing::debug!(request, error = %message, "listing fetch failed");
                self.error = Some("Failed to load movies. Please try again.".to_string());
            }
        }
        true
    }

    /// Current results header label, derived from the fetch lifecycle.
    #[must_use]
    pub fn results_label(&self) -> String {
        composer::results_label(
            &self.filters,
            self.loading,
            self.error.is_some(),
            self.movies.as_ref().map(Vec::len),
        )
    }

    /// Looks up a genre name by id in the fetched genre list.
    #[must_use]
    pub fn genre_name(&self, genre_id: u32) -> Option<&str> {
        self.genres
            .iter()
            .find(|genre| genre.id == genre_id)
            .map(|genre| genre.name.as_str())
    }

    /// Resolves a user-entered genre name to the best-matching known genre.
    ///
    /// Fuzzy matched so "sci fi" finds "Science Fiction". Returns `None`
    /// when nothing matches or the genre list is empty.
    #[must_use]
    pub fn find_genre(&self, name: &str) -> Option<&Genre> {
        let matcher = SkimMatcherV2::default();
        self.genres
            .iter()
            .filter_map(|genre| {
                matcher
                    .fuzzy_match(&genre.name.to_lowercase(), &name.to_lowercase())
                    .map(|score| (score, genre))
            })
            .max_by_key(|(score, _)| *score)
            .map(|(_, genre)| genre)
    }
}

//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and worker responses, translating them into state changes and action
//! sequences. It is the primary control-flow coordinator: every filter or
//! search change funnels through here, recomposes the outbound query, and
//! emits exactly one new fetch request.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the host runtime or the fetch worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State and watchlist mutations occur via their owning types
//! 4. Actions are collected and returned for execution
//!
//! All mutations run to completion before the next event is processed; the
//! only suspension points are the fetches themselves, which live behind the
//! worker boundary.

use crate::app::actions::{Action, NoticeKind, Route};
use crate::app::state::AppState;
use crate::domain::error::Result;
use crate::domain::MovieSummary;
use crate::query::SortKey;
use crate::storage::WatchlistStore;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The search input changed; replaces the whole term.
    SearchInput(String),

    /// Adds or removes a genre from the selection.
    ToggleGenre(u32),

    /// Sets the raw "from" year input.
    SetStartYear(String),

    /// Sets the raw "to" year input.
    SetEndYear(String),

    /// Changes the discover sort order.
    SetSortKey(SortKey),

    /// Resets all filters and the search term.
    ClearFilters,

    /// Explicit user-initiated retry of the current query. The only way a
    /// failed fetch is re-attempted; nothing retries automatically.
    Retry,

    /// Opens the details view for a movie.
    OpenMovie(u64),

    /// Returns to the listing view.
    GoHome,

    /// Opens the saved-movies view.
    OpenWatchlist,

    /// Adds the movie if absent, removes it if present.
    ToggleWatchlist(MovieSummary),

    /// Removes one entry from the watchlist.
    RemoveFromWatchlist(u64),

    /// Empties the watchlist.
    ClearWatchlist,

    /// Wraps a response from the fetch worker.
    WorkerResponse(WorkerResponse),
}

/// Issues a fresh listing fetch for the current filter state.
///
/// Called after every filter mutation: mints the next request token and
/// produces the single fetch action that should now be in flight. Any
/// previously outstanding request is implicitly superseded — its token no
/// longer matches, so its result will be discarded on arrival.
fn request_listing(state: &mut AppState) -> Vec<Action> {
    let (request, query) = state.begin_listing_fetch();
    vec![Action::PostToWorker(WorkerMessage::FetchListing {
        request,
        query,
    })]
}

/// Processes an event, mutates state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Listing view state
/// * `watchlist` - The watchlist store, injected by the host
/// * `event` - Event to process
///
/// # Returns
///
/// A `(render, actions)` pair: whether the host should re-render, and the
/// side effects to execute in sequence.
///
/// # Errors
///
/// Returns errors from state mutation; the current handlers are infallible
/// but the signature keeps the host's dispatch uniform.
#[allow(clippy::too_many_lines)]
pub fn handle_event(
    state: &mut AppState,
    watchlist: &mut WatchlistStore,
    event: &Event,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchInput(term) => {
            state.filters.search_term.clone_from(term);
            Ok((true, request_listing(state)))
        }
        Event::ToggleGenre(genre_id) => {
            state.filters.toggle_genre(*genre_id);
            Ok((true, request_listing(state)))
        }
        Event::SetStartYear(year) => {
            state.filters.start_year.clone_from(year);
            Ok((true, request_listing(state)))
        }
        Event::SetEndYear(year) => {
            state.filters.end_year.clone_from(year);
            Ok((true, request_listing(state)))
        }
        Event::SetSortKey(sort_key) => {
            state.filters.sort_key = *sort_key;
            Ok((true, request_listing(state)))
        }
        Event::ClearFilters => {
            tracing::debug!("clearing all filters");
            state.filters.clear_all();
            Ok((true, request_listing(state)))
        }
        Event::Retry => Ok((true, request_listing(state))),
        Event::OpenMovie(movie_id) => {
            state.selected = None;
            state.detail_error = None;
            Ok((
                true,
                vec![
                    Action::Navigate(Route::MovieDetails(*movie_id)),
                    Action::PostToWorker(WorkerMessage::FetchDetails {
                        movie_id: *movie_id,
                    }),
                ],
            ))
        }
        Event::GoHome => {
            state.selected = None;
            state.detail_error = None;
            Ok((true, vec![Action::Navigate(Route::Home)]))
        }
        Event::OpenWatchlist => Ok((true, vec![Action::Navigate(Route::Watchlist)])),
        Event::ToggleWatchlist(movie) => {
            let (kind, message) = if watchlist.contains(movie.id) {
                watchlist.remove(movie.id);
                (NoticeKind::Error, "Removed from watchlist".to_string())
            } else {
                watchlist.add(movie.clone());
                (NoticeKind::Success, "Added to watchlist".to_string())
            };
            Ok((true, vec![Action::Notify { kind, message }]))
        }
        Event::RemoveFromWatchlist(movie_id) => {
            let title = watchlist
                .entries()
                .iter()
                .find(|movie| movie.id == *movie_id)
                .map(|movie| movie.title.clone());

            if watchlist.remove(*movie_id) {
                let title = title.unwrap_or_default();
                Ok((
                    true,
                    vec![Action::Notify {
                        kind: NoticeKind::Error,
                        message: format!("Removed \"{title}\" from watchlist"),
                    }],
                ))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::ClearWatchlist => {
            if watchlist.is_empty() {
                return Ok((false, vec![]));
            }
            watchlist.clear();
            Ok((
                true,
                vec![Action::Notify {
                    kind: NoticeKind::Error,
                    message: "Cleared entire watchlist".to_string(),
                }],
            ))
        }
        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

/// Applies a fetch worker response to state.
fn handle_worker_response(
    state: &mut AppState,
    response: &WorkerResponse,
) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::GenresLoaded { genres } => {
            tracing::debug!(genre_count = genres.len(), "genre list loaded");
            state.genres.clone_from(genres);
            Ok((true, vec![]))
        }
        WorkerResponse::GenresFailed { message } => {
            // Degrades silently: genre filters stay unavailable, the rest of
            // the app keeps working.
            tracing::debug!(error = %message, "genre list fetch failed");
            Ok((false, vec![]))
        }
        WorkerResponse::ListingLoaded { request, movies } => {
            let applied = state.apply_listing(*request, Ok(movies.clone()));
            Ok((applied, vec![]))
        }
        WorkerResponse::ListingFailed { request, message } => {
            let applied = state.apply_listing(*request, Err(message.clone()));
            Ok((applied, vec![]))
        }
        WorkerResponse::DetailsLoaded { details } => {
            state.selected = Some(details.clone());
            state.detail_error = None;
            Ok((true, vec![]))
        }
        WorkerResponse::DetailsFailed { movie_id, message } => {
            tracing::debug!(movie_id, error = %message, "details fetch failed");
            state.selected = None;
            state.detail_error =
                Some("Failed to load movie details. Please try again.".to_string());
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::Result as CoreResult;
    use crate::domain::MovieSummary;
    use crate::query::QueryMode;
    use crate::storage::backend::WatchlistStorage;

    #[derive(Default)]
    struct MemoryStorage {
        saved: Vec<MovieSummary>,
    }

    impl WatchlistStorage for MemoryStorage {
        fn load(&self) -> CoreResult<Vec<MovieSummary>> {
            Ok(self.saved.clone())
        }

        fn save(&mut self, movies: &[MovieSummary]) -> CoreResult<()> {
            self.saved = movies.to_vec();
            Ok(())
        }
    }

    fn empty_watchlist() -> WatchlistStore {
        WatchlistStore::new(Box::new(MemoryStorage::default()))
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

    /// Pulls the listing request token out of the emitted fetch action.
    fn fetch_token(actions: &[Action]) -> u64 {
        match &actions[..] {
            [Action::PostToWorker(WorkerMessage::FetchListing { request, .. })] => *request,
            other => panic!("expected a single fetch action, got {other:?}"),
        }
    }

    #[test]
    fn every_filter_change_issues_one_fetch() {
        let mut state = AppState::new();
        let mut watchlist = empty_watchlist();

        let events = [
            Event::SearchInput("alien".to_string()),
            Event::ToggleGenre(28),
            Event::SetStartYear("2010".to_string()),
            Event::SetEndYear("2020".to_string()),
            Event::SetSortKey(SortKey::RatingDesc),
            Event::ClearFilters,
            Event::Retry,
        ];

        let mut last_token = 0;
        for event in &events {
            let (render, actions) = handle_event(&mut state, &mut watchlist, event).unwrap();
            assert!(render);
            let token = fetch_token(&actions);
            assert!(token > last_token, "tokens must be monotonic");
            last_token = token;
        }
    }

    #[test]
    fn search_input_switches_the_composed_mode() {
        let mut state = AppState::new();
        let mut watchlist = empty_watchlist();

        let (_, actions) = handle_event(
            &mut state,
            &mut watchlist,
            &Event::SearchInput("Inception".to_string()),
        )
        .unwrap();

        match &actions[..] {
            [Action::PostToWorker(WorkerMessage::FetchListing { query, .. })] => {
                assert_eq!(query.mode, QueryMode::Search);
            }
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn stale_fetch_result_is_not_applied() {
        let mut state = AppState::new();
        let mut watchlist = empty_watchlist();

        // Fetch A, then fetch B supersedes it.
        let (_, actions_a) =
            handle_event(&mut state, &mut watchlist, &Event::SearchInput("ali".into())).unwrap();
        let token_a = fetch_token(&actions_a);
        let (_, actions_b) = handle_event(
            &mut state,
            &mut watchlist,
            &Event::SearchInput("alien".into()),
        )
        .unwrap();
        let token_b = fetch_token(&actions_b);

        // B resolves first, then A's result straggles in.
        let (render_b, _) = handle_event(
            &mut state,
            &mut watchlist,
            &Event::WorkerResponse(WorkerResponse::ListingLoaded {
                request: token_b,
                movies: vec![movie(2, "Alien")],
            }),
        )
        .unwrap();
        let (render_a, _) = handle_event(
            &mut state,
            &mut watchlist,
            &Event::WorkerResponse(WorkerResponse::ListingLoaded {
                request: token_a,
                movies: vec![movie(1, "Ali")],
            }),
        )
        .unwrap();

        assert!(render_b);
        assert!(!render_a, "stale response must not trigger a render");
        assert_eq!(state.movies.as_ref().unwrap()[0].title, "Alien");
    }

    #[test]
    fn genre_failure_degrades_silently() {
        let mut state = AppState::new();
        let mut watchlist = empty_watchlist();

        let (render, actions) = handle_event(
            &mut state,
            &mut watchlist,
            &Event::WorkerResponse(WorkerResponse::GenresFailed {
                message: "offline".to_string(),
            }),
        )
        .unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.genres.is_empty());
    }

    #[test]
    fn toggle_watchlist_adds_then_removes_with_notices() {
        let mut state = AppState::new();
        let mut watchlist = empty_watchlist();
        let entry = movie(27205, "Inception");

        let (_, actions) = handle_event(
            &mut state,
            &mut watchlist,
            &Event::ToggleWatchlist(entry.clone()),
        )
        .unwrap();
        assert!(watchlist.contains(27205));
        assert_eq!(
            actions,
            vec![Action::Notify {
                kind: NoticeKind::Success,
                message: "Added to watchlist".to_string(),
            }]
        );

        let (_, actions) =
            handle_event(&mut state, &mut watchlist, &Event::ToggleWatchlist(entry)).unwrap();
        assert!(!watchlist.contains(27205));
        assert_eq!(
            actions,
            vec![Action::Notify {
                kind: NoticeKind::Error,
                message: "Removed from watchlist".to_string(),
            }]
        );
    }

    #[test]
    fn remove_names_the_movie_in_the_notice() {
        let mut state = AppState::new();
        let mut watchlist = empty_watchlist();
        watchlist.add(movie(1, "Heat"));

        let (_, actions) =
            handle_event(&mut state, &mut watchlist, &Event::RemoveFromWatchlist(1)).unwrap();
        assert_eq!(
            actions,
            vec![Action::Notify {
                kind: NoticeKind::Error,
                message: "Removed \"Heat\" from watchlist".to_string(),
            }]
        );

        // Removing a missing entry is a silent no-op.
        let (render, actions) =
            handle_event(&mut state, &mut watchlist, &Event::RemoveFromWatchlist(1)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn navigation_events_route_to_their_views() {
        let mut state = AppState::new();
        let mut watchlist = empty_watchlist();

        let (_, actions) =
            handle_event(&mut state, &mut watchlist, &Event::OpenWatchlist).unwrap();
        assert_eq!(actions, vec![Action::Navigate(Route::Watchlist)]);

        let (_, actions) = handle_event(&mut state, &mut watchlist, &Event::GoHome).unwrap();
        assert_eq!(actions, vec![Action::Navigate(Route::Home)]);
    }

    #[test]
    fn open_movie_navigates_and_fetches_details() {
        let mut state = AppState::new();
        let mut watchlist = empty_watchlist();

        let (_, actions) =
            handle_event(&mut state, &mut watchlist, &Event::OpenMovie(27205)).unwrap();
        assert_eq!(
            actions,
            vec![
                Action::Navigate(Route::MovieDetails(27205)),
                Action::PostToWorker(WorkerMessage::FetchDetails { movie_id: 27205 }),
            ]
        );
    }
}

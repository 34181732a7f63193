//! Fetch worker implementation.
//!
//! Processes [`WorkerMessage`] requests by delegating to a boxed
//! [`MovieProvider`], converting each outcome into a [`WorkerResponse`].
//! Provider failures become failure responses rather than errors: the
//! application layer decides how each one degrades.
//!
//! The worker performs exactly one provider call per message and echoes the
//! listing request token back unchanged; staleness is judged by the
//! application state, not here.

use crate::domain::error::Result;
use crate::provider::MovieProvider;
use crate::worker::{WorkerMessage, WorkerResponse};

/// The fetch worker owning the provider connection.
///
/// `Send` by construction, so a multi-threaded host can park it on its own
/// thread and serialize all provider traffic through it.
pub struct FetchWorker {
    provider: Box<dyn MovieProvider>,
}

impl FetchWorker {
    /// Creates a worker around the given provider.
    #[must_use]
    pub fn new(provider: Box<dyn MovieProvider>) -> Self {
        Self { provider }
    }

    /// Helper for converting provider results with consistent logging.
    fn handle_provider_result<T>(
        operation: &str,
        result: Result<T>,
        on_success: impl FnOnce(T) -> WorkerResponse,
        on_failure: impl FnOnce(String) -> WorkerResponse,
    ) -> WorkerResponse {
        match result {
            Ok(value) => {
                tracing::debug!(operation, "provider call successful");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation, error = %e, "provider call failed");
                on_failure(e.to_string())
            }
        }
    }

    /// Processes one message and returns the response to feed back to the
    /// application layer.
    pub fn handle_message(&self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::FetchGenres => Self::handle_provider_result(
                "fetch genres",
                self.provider.list_genres(),
                |genres| WorkerResponse::GenresLoaded { genres },
                |message| WorkerResponse::GenresFailed { message },
            ),

            WorkerMessage::FetchListing { request, query } => Self::handle_provider_result(
                "fetch listing",
                self.provider.fetch_listing(&query),
                |movies| WorkerResponse::ListingLoaded { request, movies },
                |message| WorkerResponse::ListingFailed { request, message },
            ),

            WorkerMessage::FetchDetails { movie_id } => Self::handle_provider_result(
                "fetch details",
                self.provider.movie_details(movie_id),
                |details| WorkerResponse::DetailsLoaded {
                    details: Box::new(details),
                },
                |message| WorkerResponse::DetailsFailed { movie_id, message },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ReelscoutError;
    use crate::domain::{Genre, MovieDetails, MovieSummary};
    use crate::query::{compose, FilterState};
    use std::collections::BTreeMap;

    /// Provider stub returning canned data, or failing when `healthy` is off.
    struct StubProvider {
        healthy: bool,
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

    impl MovieProvider for StubProvider {
        fn list_genres(&self) -> crate::domain::error::Result<Vec<Genre>> {
            if !self.healthy {
                return Err(ReelscoutError::Provider("genres down".to_string()));
            }
            Ok(vec![Genre {
                id: 28,
                name: "Action".to_string(),
            }])
        }

        fn search(&self, query: &str) -> crate::domain::error::Result<Vec<MovieSummary>> {
            if !self.healthy {
                return Err(ReelscoutError::Provider("search down".to_string()));
            }
            Ok(vec![movie(1, query)])
        }

        fn discover(
            &self,
            _parameters: &BTreeMap<String, String>,
        ) -> crate::domain::error::Result<Vec<MovieSummary>> {
            if !self.healthy {
                return Err(ReelscoutError::Provider("discover down".to_string()));
            }
            Ok(vec![])
        }

        fn movie_details(&self, movie_id: u64) -> crate::domain::error::Result<MovieDetails> {
            if !self.healthy {
                return Err(ReelscoutError::Provider("details down".to_string()));
            }
            Ok(MovieDetails {
                id: movie_id,
                title: "Inception".to_string(),
                poster_path: None,
                release_date: None,
                vote_average: None,
                popularity: None,
                genres: vec![],
                runtime: Some(148),
                overview: None,
                cast: vec![],
            })
        }
    }

    #[test]
    fn listing_response_echoes_the_request_token() {
        let worker = FetchWorker::new(Box::new(StubProvider { healthy: true }));
        let state = FilterState {
            search_term: "Inception".to_string(),
            ..Default::default()
        };

        let response = worker.handle_message(WorkerMessage::FetchListing {
            request: 42,
            query: compose(&state),
        });

        match response {
            WorkerResponse::ListingLoaded { request, movies } => {
                assert_eq!(request, 42);
                assert_eq!(movies[0].title, "Inception");
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn empty_listing_is_a_success_not_a_failure() {
        let worker = FetchWorker::new(Box::new(StubProvider { healthy: true }));
        let response = worker.handle_message(WorkerMessage::FetchListing {
            request: 1,
            query: compose(&FilterState::default()),
        });
        assert!(matches!(
            response,
            WorkerResponse::ListingLoaded { movies, .. } if movies.is_empty()
        ));
    }

    #[test]
    fn failures_keep_the_token_for_staleness_checks() {
        let worker = FetchWorker::new(Box::new(StubProvider { healthy: false }));
        let response = worker.handle_message(WorkerMessage::FetchListing {
            request: 7,
            query: compose(&FilterState::default()),
        });
        assert!(matches!(
            response,
            WorkerResponse::ListingFailed { request: 7, .. }
        ));
    }

    #[test]
    fn genre_and_details_messages_dispatch() {
        let worker = FetchWorker::new(Box::new(StubProvider { healthy: true }));

        assert!(matches!(
            worker.handle_message(WorkerMessage::FetchGenres),
            WorkerResponse::GenresLoaded { genres } if genres.len() == 1
        ));
        assert!(matches!(
            worker.handle_message(WorkerMessage::FetchDetails { movie_id: 27205 }),
            WorkerResponse::DetailsLoaded { details } if details.id == 27205
        ));
    }
}

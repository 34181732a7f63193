//! Fetch worker message types.
//!
//! This module defines the request and response protocol between the
//! application layer and the fetch worker that talks to the metadata
//! provider. Listing requests carry a monotonic request token minted by the
//! application state; the token rides the whole round trip so the handler
//! can discard responses that a newer request has superseded.

use crate::domain::{Genre, MovieDetails, MovieSummary};
use crate::query::QueryDescriptor;
use serde::{Deserialize, Serialize};

/// Requests sent from the application layer to the fetch worker.
///
/// Each variant corresponds to exactly one provider call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Fetch the provider's genre list. Issued once at startup; no token,
    /// since there is never more than one in flight.
    FetchGenres,

    /// Execute a composed listing query (search or discover).
    FetchListing {
        /// Monotonic sequence token identifying this request.
        request: u64,

        /// The query to execute.
        query: QueryDescriptor,
    },

    /// Fetch full details for one movie.
    FetchDetails {
        /// Provider movie id.
        movie_id: u64,
    },
}

/// Responses sent from the fetch worker back to the application layer.
///
/// Failures are data, not panics: every fetch resolves to a `*Loaded` or
/// `*Failed` variant, and an empty `movies` list in `ListingLoaded` is a
/// valid success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The genre list was fetched.
    GenresLoaded {
        /// Genres in provider order.
        genres: Vec<Genre>,
    },

    /// The genre fetch failed. Degrades silently upstream.
    GenresFailed {
        /// Human-readable error message.
        message: String,
    },

    /// A listing query resolved successfully.
    ListingLoaded {
        /// Token of the request this answers.
        request: u64,

        /// Result list; may be empty.
        movies: Vec<MovieSummary>,
    },

    /// A listing query failed.
    ListingFailed {
        /// Token of the request this answers.
        request: u64,

        /// Human-readable error message.
        message: String,
    },

    /// A details fetch resolved successfully.
    DetailsLoaded {
        /// The fetched record.
        details: Box<MovieDetails>,
    },

    /// A details fetch failed.
    DetailsFailed {
        /// The movie the fetch was for.
        movie_id: u64,

        /// Human-readable error message.
        message: String,
    },
}

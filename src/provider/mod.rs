//! Movie metadata provider abstraction.
//!
//! This module defines the [`MovieProvider`] trait that abstracts over the
//! remote metadata API the core consumes. The trait is minimal and mirrors
//! the four operations the core needs; swapping in a stub implementation is
//! how the worker and handler tests run without a network.
//!
//! Failure of any call is distinguishable from "zero results": an empty
//! successful result list is a valid outcome and renders an empty state, not
//! an error state.

pub mod tmdb;

use crate::domain::error::Result;
use crate::domain::{Genre, MovieDetails, MovieSummary};
use crate::query::{QueryDescriptor, QueryMode};
use std::collections::BTreeMap;

pub use tmdb::TmdbClient;

/// Abstraction over the remote movie-metadata API.
///
/// Implementations must be `Send` so a host may move the fetch worker onto
/// its own thread. Every method performs at most one network call.
///
/// # Implementations
///
/// - [`TmdbClient`]: blocking HTTP client against a TMDB-shaped API (default)
pub trait MovieProvider: Send {
    /// Retrieves the provider's movie genre list.
    ///
    /// Called once at startup. A failure here degrades gracefully upstream:
    /// genre filtering becomes unavailable but nothing else breaks.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success response.
    fn list_genres(&self) -> Result<Vec<Genre>>;

    /// Free-text title search.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success response.
    fn search(&self, query: &str) -> Result<Vec<MovieSummary>>;

    /// Filtered discovery with raw provider parameters.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success response.
    fn discover(&self, parameters: &BTreeMap<String, String>) -> Result<Vec<MovieSummary>>;

    /// Full details for a single movie, including genres, runtime, overview,
    /// and cast.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success response.
    fn movie_details(&self, movie_id: u64) -> Result<MovieDetails>;

    /// Executes a composed query descriptor with exactly one provider call.
    ///
    /// This is the execution contract the composer's caller relies on: one
    /// descriptor, one network call, one result list or failure.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success response.
    fn fetch_listing(&self, query: &QueryDescriptor) -> Result<Vec<MovieSummary>> {
        match query.mode {
            QueryMode::Search => {
                let term = query
                    .parameters
                    .get("query")
                    .map(String::as_str)
                    .unwrap_or_default();
                self.search(term)
            }
            QueryMode::Discover => self.discover(&query.parameters),
        }
    }
}

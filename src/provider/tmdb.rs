//! Blocking HTTP client for a TMDB-shaped metadata API.
//!
//! Implements [`MovieProvider`] over `ureq`. Each operation issues exactly
//! one GET request; query parameters are passed raw and percent-encoded by
//! the transport. Non-success statuses and network failures both map to
//! [`ReelscoutError::Provider`], keeping them distinguishable from an empty
//! (successful) result list.

use crate::domain::error::{ReelscoutError, Result};
use crate::domain::{CastMember, Genre, MovieDetails, MovieSummary};
use crate::provider::MovieProvider;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use ureq::Agent;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default `language` parameter sent with every request.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Listing envelope returned by the search and discover endpoints.
#[derive(Debug, Deserialize)]
struct ListingResponse {
    #[serde(default)]
    results: Vec<MovieSummary>,
}

/// Envelope returned by the genre list endpoint.
#[derive(Debug, Deserialize)]
struct GenreListResponse {
    #[serde(default)]
    genres: Vec<Genre>,
}

/// Cast credits appended to the details response.
#[derive(Debug, Default, Deserialize)]
struct CreditsResponse {
    #[serde(default)]
    cast: Vec<CastMember>,
}

/// Raw details response, flattened into [`MovieDetails`] after decoding.
#[derive(Debug, Deserialize)]
struct DetailsResponse {
    id: u64,
    title: String,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    vote_average: Option<f64>,
    #[serde(default)]
    popularity: Option<f64>,
    #[serde(default)]
    genres: Vec<Genre>,
    #[serde(default)]
    runtime: Option<u32>,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    credits: Option<CreditsResponse>,
}

/// Blocking client for the metadata API.
///
/// Cheap to construct; holds a reusable connection agent, the API key, and
/// the base URL (overridable for tests or mirrors).
pub struct TmdbClient {
    agent: Agent,
    api_key: String,
    base_url: String,
    language: String,
}

impl TmdbClient {
    /// Creates a client against the default API base URL.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            agent: Agent::new_with_defaults(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the `language` parameter sent with every request.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Issues a single GET against `endpoint` and decodes the JSON body.
    ///
    /// Authentication and language parameters are attached here so callers
    /// only supply the operation-specific ones.
    fn get_json<T: DeserializeOwned>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let _span = tracing::debug_span!("provider_request", endpoint = %endpoint).entered();

        let mut request = self
            .agent
            .get(&url)
            .query("api_key", &self.api_key)
            .query("language", &self.language);
        for (key, value) in params {
            request = request.query(*key, *value);
        }

        let mut response = request.call().map_err(|e| {
            tracing::debug!(endpoint = %endpoint, error = %e, "provider request failed");
            ReelscoutError::Provider(format!("{endpoint}: {e}"))
        })?;

        response.body_mut().read_json::<T>().map_err(|e| {
            tracing::debug!(endpoint = %endpoint, error = %e, "provider response malformed");
            ReelscoutError::Provider(format!("{endpoint}: invalid response body: {e}"))
        })
    }
}

impl MovieProvider for TmdbClient {
    fn list_genres(&self) -> Result<Vec<Genre>> {
        let response: GenreListResponse = self.get_json("genre/movie/list", &[])?;
        tracing::debug!(genre_count = response.genres.len(), "genres fetched");
        Ok(response.genres)
    }

    fn search(&self, query: &str) -> Result<Vec<MovieSummary>> {
        let response: ListingResponse = self.get_json("search/movie", &[("query", query)])?;
        tracing::debug!(result_count = response.results.len(), "search completed");
        Ok(response.results)
    }

    fn discover(&self, parameters: &BTreeMap<String, String>) -> Result<Vec<MovieSummary>> {
        let params: Vec<(&str, &str)> = parameters
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let response: ListingResponse = self.get_json("discover/movie", &params)?;
        tracing::debug!(result_count = response.results.len(), "discover completed");
        Ok(response.results)
    }

    fn movie_details(&self, movie_id: u64) -> Result<MovieDetails> {
        let endpoint = format!("movie/{movie_id}");
        let response: DetailsResponse =
            self.get_json(&endpoint, &[("append_to_response", "credits")])?;

        Ok(MovieDetails {
            id: response.id,
            title: response.title,
            poster_path: response.poster_path,
            release_date: response.release_date,
            vote_average: response.vote_average,
            popularity: response.popularity,
            genres: response.genres,
            runtime: response.runtime,
            overview: response.overview,
            cast: response.credits.unwrap_or_default().cast,
        })
    }
}

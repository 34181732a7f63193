//! Movie domain models.
//!
//! This module defines the core movie records used throughout the crate:
//! [`MovieSummary`] (the minimal immutable record returned by listing queries
//! and stored in the watchlist), [`Genre`], and the richer [`MovieDetails`]
//! returned by the details endpoint. Optional provider fields (poster, release
//! date, rating) are modeled explicitly as `Option` with defined fallback
//! presentation values rather than ad-hoc absence checks at call sites.

use serde::{Deserialize, Serialize};

/// Base URL for provider-hosted poster and profile images, at a sensible
/// default width for list presentation.
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Fallback label when a movie has no release date.
const UNKNOWN_RELEASE: &str = "Release date unknown";

/// A movie genre as sourced from the provider's genre list.
///
/// Read-only for this core; the list is fetched once at startup and used to
/// translate genre selections into query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// The minimal immutable movie record used throughout the core.
///
/// Listing queries (search and discover) yield these, and the watchlist
/// stores snapshots of them at the time of adding. A later metadata change
/// upstream does not alter a saved entry. Uniqueness is keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Provider-assigned unique movie identifier.
    pub id: u64,

    /// Display title.
    pub title: String,

    /// Poster image path fragment, `None` when the provider has no artwork.
    #[serde(default)]
    pub poster_path: Option<String>,

    /// Release date in `YYYY-MM-DD` form, `None` when unknown.
    #[serde(default)]
    pub release_date: Option<String>,

    /// Average user rating on the provider's 0-10 scale.
    #[serde(default)]
    pub vote_average: Option<f64>,

    /// Provider popularity score, used for the default sort order.
    #[serde(default)]
    pub popularity: Option<f64>,
}

impl MovieSummary {
    /// Returns the full poster URL, or `None` when the movie has no artwork.
    #[must_use]
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_ref()
            .map(|path| format!("{IMAGE_BASE_URL}{path}"))
    }

    /// Returns the four-digit release year when the release date is known
    /// and well-formed.
    #[must_use]
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .filter(|year| year.bytes().all(|b| b.is_ascii_digit()))
    }

    /// Returns a display label for the release date, falling back to a fixed
    /// "unknown" label when absent.
    #[must_use]
    pub fn release_label(&self) -> &str {
        self.release_date.as_deref().unwrap_or(UNKNOWN_RELEASE)
    }

    /// Returns the rating formatted to one decimal place, or `"—"` when the
    /// provider supplied none.
    #[must_use]
    pub fn rating_label(&self) -> String {
        self.vote_average
            .map_or_else(|| "—".to_string(), |rating| format!("{rating:.1}"))
    }
}

/// A cast credit attached to [`MovieDetails`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,

    /// Character played, empty for uncredited roles.
    #[serde(default)]
    pub character: String,

    /// Profile image path fragment, `None` when the person has no photo.
    #[serde(default)]
    pub profile_path: Option<String>,
}

impl CastMember {
    /// Returns the full profile image URL, or `None` when absent.
    #[must_use]
    pub fn profile_url(&self) -> Option<String> {
        self.profile_path
            .as_ref()
            .map(|path| format!("{IMAGE_BASE_URL}{path}"))
    }
}

/// The full movie record returned by the details endpoint.
///
/// Extends the summary fields with genres, runtime, overview, and cast. The
/// watchlist never stores this shape; [`MovieDetails::summary`] produces the
/// snapshot that gets persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub popularity: Option<f64>,

    /// Genres this movie is tagged with.
    #[serde(default)]
    pub genres: Vec<Genre>,

    /// Runtime in minutes, `None` when the provider has none on record.
    #[serde(default)]
    pub runtime: Option<u32>,

    /// Plot synopsis.
    #[serde(default)]
    pub overview: Option<String>,

    /// Top-billed cast.
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

impl MovieDetails {
    /// Extracts the summary snapshot used for watchlist entries.
    #[must_use]
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            poster_path: self.poster_path.clone(),
            release_date: self.release_date.clone(),
            vote_average: self.vote_average,
            popularity: self.popularity,
        }
    }

    /// Returns the runtime formatted as `"2h 28m"`, or an empty string when
    /// unknown, matching the presentation fallback for absent fields.
    #[must_use]
    pub fn runtime_label(&self) -> String {
        self.runtime.map_or_else(String::new, |minutes| {
            format!("{}h {}m", minutes / 60, minutes % 60)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: u64, title: &str) -> MovieSummary {
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
    fn poster_url_requires_path() {
        let mut movie = summary(1, "Inception");
        assert_eq!(movie.poster_url(), None);

        movie.poster_path = Some("/abc.jpg".to_string());
        assert_eq!(
            movie.poster_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
    }

    #[test]
    fn release_year_rejects_malformed_dates() {
        let mut movie = summary(1, "Inception");
        assert_eq!(movie.release_year(), None);

        movie.release_date = Some("2010-07-16".to_string());
        assert_eq!(movie.release_year(), Some("2010"));

        movie.release_date = Some("soon".to_string());
        assert_eq!(movie.release_year(), None);
        assert_eq!(movie.release_label(), "soon");

        // A multi-byte character straddling the fourth byte must not panic.
        movie.release_date = Some("123\u{e9}".to_string());
        assert_eq!(movie.release_year(), None);

        movie.release_date = Some("ab".to_string());
        assert_eq!(movie.release_year(), None);

        movie.release_date = None;
        assert_eq!(movie.release_label(), "Release date unknown");
    }

    #[test]
    fn rating_label_falls_back_when_absent() {
        let mut movie = summary(1, "Inception");
        assert_eq!(movie.rating_label(), "—");

        movie.vote_average = Some(8.364);
        assert_eq!(movie.rating_label(), "8.4");
    }

    #[test]
    fn details_summary_keeps_identity_fields() {
        let details = MovieDetails {
            id: 27205,
            title: "Inception".to_string(),
            poster_path: Some("/poster.jpg".to_string()),
            release_date: Some("2010-07-16".to_string()),
            vote_average: Some(8.4),
            popularity: Some(90.5),
            genres: vec![Genre {
                id: 28,
                name: "Action".to_string(),
            }],
            runtime: Some(148),
            overview: Some("A thief who steals corporate secrets.".to_string()),
            cast: vec![],
        };

        let snapshot = details.summary();
        assert_eq!(snapshot.id, 27205);
        assert_eq!(snapshot.title, "Inception");
        assert_eq!(snapshot.poster_path.as_deref(), Some("/poster.jpg"));
        assert_eq!(details.runtime_label(), "2h 28m");
    }
}

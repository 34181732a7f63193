//! Filter and search state owned by the composing view.
//!
//! [`FilterState`] holds the raw user-driven inputs (search text, genre
//! selection, year range, sort order) that the composer translates into a
//! single outbound query. Year fields are kept as raw strings exactly as the
//! presentation layer produced them; validation is deliberately tolerant and
//! happens at composition time, where unparsable values are treated as
//! absent rather than rejected.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Minimum significant length of the search term (exclusive) before the
/// query switches from discover mode to search mode.
pub const SEARCH_ACTIVATION_LEN: usize = 2;

/// Lower bound for an acceptable release-year filter value.
const MIN_YEAR: i32 = 1900;

/// Years past the current year still accepted as a release-year filter,
/// covering announced-but-unreleased titles.
const FUTURE_YEAR_SLACK: i32 = 5;

/// Sort order for discover-mode queries.
///
/// The variants map one-to-one onto the provider's `sort_by` parameter
/// values. Sort order is only meaningful in discover mode; search mode
/// suppresses it from the outbound query without clearing it from state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Most popular first (the provider default and ours).
    #[default]
    PopularityDesc,

    /// Highest rated first.
    RatingDesc,

    /// Latest releases first.
    ReleaseDesc,

    /// Oldest releases first.
    ReleaseAsc,
}

impl SortKey {
    /// Returns the provider's `sort_by` parameter value for this key.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::PopularityDesc => "popularity.desc",
            Self::RatingDesc => "vote_average.desc",
            Self::ReleaseDesc => "release_date.desc",
            Self::ReleaseAsc => "release_date.asc",
        }
    }

    /// Parses a provider-style `sort_by` value back into a key.
    ///
    /// Returns `None` for unrecognized values so the caller can decide on a
    /// fallback.
    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "popularity.desc" => Some(Self::PopularityDesc),
            "vote_average.desc" => Some(Self::RatingDesc),
            "release_date.desc" => Some(Self::ReleaseDesc),
            "release_date.asc" => Some(Self::ReleaseAsc),
            _ => None,
        }
    }
}

/// The complete filter/search state a listing query derives from.
///
/// Owned exclusively by the composing view; the composer reads it as a pure
/// input. Genre and year filters stay retained in state while search mode is
/// active so that clearing the search term restores the previous discover
/// query unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Raw search text. Trimmed length beyond [`SEARCH_ACTIVATION_LEN`]
    /// activates search mode.
    pub search_term: String,

    /// Selected genre ids. Set semantics; the provider treats the resulting
    /// `with_genres` parameter as an unordered filter.
    pub selected_genre_ids: BTreeSet<u32>,

    /// Raw "from" year input, empty string when absent.
    pub start_year: String,

    /// Raw "to" year input, empty string when absent.
    pub end_year: String,

    /// Discover-mode sort order.
    pub sort_key: SortKey,
}

impl FilterState {
    /// Returns whether the search term has crossed the activation threshold,
    /// putting the system in search mode.
    #[must_use]
    pub fn is_search_mode(&self) -> bool {
        self.search_term.trim().chars().count() > SEARCH_ACTIVATION_LEN
    }

    /// Number of discover filters currently set (genres count individually,
    /// plus one per usable year bound). Drives the "Filtered Movies" label.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.selected_genre_ids.len()
            + usize::from(parse_year(&self.start_year).is_some())
            + usize::from(parse_year(&self.end_year).is_some())
    }

    /// Returns whether any filter or an active search is in effect, which is
    /// when the presentation layer offers a "clear all" affordance.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.active_filter_count() > 0 || self.is_search_mode()
    }

    /// Adds or removes a genre id from the selection.
    pub fn toggle_genre(&mut self, genre_id: u32) {
        if !self.selected_genre_ids.remove(&genre_id) {
            self.selected_genre_ids.insert(genre_id);
        }
    }

    /// Resets every filter and the search term to defaults.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }
}

/// Parses a raw year input, returning `None` for anything unusable.
///
/// Invalid input is a presentation-layer validation concern; at this layer an
/// unparsable or out-of-range value simply means "filter absent". Accepted
/// range is 1900 through five years past the current year.
#[must_use]
pub fn parse_year(raw: &str) -> Option<i32> {
    let year: i32 = raw.trim().parse().ok()?;
    let max_year = chrono::Utc::now().year() + FUTURE_YEAR_SLACK;
    (MIN_YEAR..=max_year).contains(&year).then_some(year)
}

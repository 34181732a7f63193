//! Query composition: deriving the single outbound query from filter state.
//!
//! [`compose`] is a pure function of [`FilterState`]: it decides between
//! search mode and discover mode, assembles the provider parameters for
//! exactly one query, and has no dependency on previous queries or any other
//! hidden state. It is re-run in full every time any constituent field
//! changes, so the query in flight always reflects the latest state.

use crate::query::filter::{parse_year, FilterState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Provider endpoint for title search queries.
const SEARCH_ENDPOINT: &str = "search/movie";

/// Provider endpoint for filtered discovery queries.
const DISCOVER_ENDPOINT: &str = "discover/movie";

/// Which query strategy a descriptor uses.
///
/// Search mode takes precedence once the search term crosses its activation
/// threshold; every other filter is suppressed from the query (but retained
/// in state) until the term drops back below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryMode {
    /// Free-text title search; the only parameter is the query itself.
    Search,

    /// Genre/year/sort filtered discovery.
    Discover,
}

/// An immutable description of the one query that should be in flight.
///
/// Recomputed from scratch on every filter state change. Parameter values are
/// raw; percent-encoding is the transport layer's responsibility. Omitted
/// filters are genuinely absent from `parameters`, never empty-string
/// placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    pub mode: QueryMode,

    /// Provider endpoint path, relative to the API base URL.
    pub endpoint: String,

    /// Query parameters, keyed deterministically.
    pub parameters: BTreeMap<String, String>,
}

/// Derives the query descriptor for the given filter state.
///
/// Any state value is valid input, including all-empty. In search mode the
/// parameter set is exactly `{query}`; in discover mode `sort_by` is always
/// present, `with_genres` appears iff the genre selection is non-empty, and
/// each release-date bound appears iff its year field holds a usable value.
/// Unparsable years are treated as absent, never as an error.
#[must_use]
pub fn compose(state: &FilterState) -> QueryDescriptor {
    let _span = tracing::debug_span!("compose_query",
        term_len = state.search_term.len(),
        genre_count = state.selected_genre_ids.len(),
    )
    .entered();

    if state.is_search_mode() {
        let mut parameters = BTreeMap::new();
        parameters.insert("query".to_string(), state.search_term.clone());

        tracing::debug!(endpoint = SEARCH_ENDPOINT, "composed search query");
        return QueryDescriptor {
            mode: QueryMode::Search,
            endpoint: SEARCH_ENDPOINT.to_string(),
            parameters,
        };
    }

    let mut parameters = BTreeMap::new();
    parameters.insert("sort_by".to_string(), state.sort_key.as_param().to_string());

    if !state.selected_genre_ids.is_empty() {
        let joined = state
            .selected_genre_ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        parameters.insert("with_genres".to_string(), joined);
    }

    if let Some(year) = parse_year(&state.start_year) {
        parameters.insert(
            "primary_release_date.gte".to_string(),
            format!("{year}-01-01"),
        );
    }

    if let Some(year) = parse_year(&state.end_year) {
        parameters.insert(
            "primary_release_date.lte".to_string(),
            format!("{year}-12-31"),
        );
    }

    tracing::debug!(
        endpoint = DISCOVER_ENDPOINT,
        parameter_count = parameters.len(),
        "composed discover query"
    );
    QueryDescriptor {
        mode: QueryMode::Discover,
        endpoint: DISCOVER_ENDPOINT.to_string(),
        parameters,
    }
}

/// Derives the results header label from the current fetch lifecycle.
///
/// Pure presentation glue kept here because it encodes the mode precedence
/// rule: loading and error states win outright, then the search label, then
/// the filter-count label, then the default. `count` is the size of the last
/// successful result list, `None` before the first load completes.
#[must_use]
pub fn results_label(
    state: &FilterState,
    loading: bool,
    error: bool,
    count: Option<usize>,
) -> String {
    if loading {
        return "Loading...".to_string();
    }
    if error {
        return "Error".to_string();
    }

    if state.is_search_mode() {
        return match count {
            Some(n) if n > 0 => format!("Search Results ({n} movies)"),
            _ => "Search Results".to_string(),
        };
    }

    if state.active_filter_count() > 0 {
        return match count {
            Some(n) if n > 0 => format!("Filtered Movies ({n} found)"),
            _ => "Filtered Movies".to_string(),
        };
    }

    "Discover Movies".to_string()
}

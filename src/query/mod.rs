//! Query composition layer.
//!
//! Translates user-driven filter/search state into the single query that
//! should be in flight against the metadata provider. Composition is a pure
//! function of state: no hidden dependencies, no side effects, recomputed in
//! full on every change.
//!
//! # Modules
//!
//! - [`filter`]: Filter state, sort keys, and tolerant year parsing
//! - [`composer`]: Descriptor derivation and results-label computation

pub mod composer;
pub mod filter;

pub use composer::{compose, results_label, QueryDescriptor, QueryMode};
pub use filter::{parse_year, FilterState, SortKey, SEARCH_ACTIVATION_LEN};

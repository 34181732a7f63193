//! Platform-specific utilities.
//!
//! Currently limited to filesystem path resolution for the data and
//! configuration directories.

pub mod paths;

pub use paths::{config_dir, config_file, data_dir, preferences_file, watchlist_file};

//! Domain layer for the reelscout core.
//!
//! This module contains the core domain types for the crate, independent of
//! provider-specific APIs or infrastructure concerns. It keeps the movie
//! records and error types isolated from the query, storage, and worker
//! layers that consume them.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Movie, genre, and cast models

pub mod error;
pub mod movie;

pub use error::{ReelscoutError, Result};
pub use movie::{CastMember, Genre, MovieDetails, MovieSummary};

//! Error types for the reelscout core.
//!
//! This module defines the centralized error type [`ReelscoutError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for reelscout operations.
///
/// This enum consolidates all error conditions that can occur in the core,
/// from provider calls to persistence and configuration issues. Provider and
/// storage failures are recovered close to where they occur (error flags in
/// application state, empty-collection fallbacks in the watchlist store), so
/// most of these variants never propagate past the crate boundary.
#[derive(Debug, Error)]
pub enum ReelscoutError {
    /// The remote metadata provider returned a non-success response or the
    /// network call failed outright.
    ///
    /// Distinct from an empty result list, which is a valid success.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Storage operation failed.
    ///
    /// Occurs when writing to the watchlist or preference backend fails.
    /// Read-side parse failures are downgraded to an empty collection inside
    /// the store and never surface as this variant.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Communication with the fetch worker failed.
    ///
    /// Occurs when a worker message cannot be dispatched or its response
    /// cannot be decoded.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values (typically the provider API
    /// key) are missing or malformed. The string describes the problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for reelscout operations.
///
/// This is a type alias for `std::result::Result<T, ReelscoutError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ReelscoutError>;

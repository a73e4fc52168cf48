//! Unified error types for the tracker.
//!
//! Storage failures (`Io`, `Json`) are caught at the store boundary and never
//! reach facade callers; `RecordNotFound` is the only error a facade operation
//! returns, and `Config` aborts startup.

use thiserror::Error;

use crate::store::Collection;

/// All errors produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Startup configuration could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration
        message: String,
    },

    /// No record with this id belongs to the requesting user.
    ///
    /// Deliberately covers both a missing id and an id owned by the other
    /// user; callers are not told which.
    #[error("{collection} {id} not found or user mismatch")]
    RecordNotFound {
        /// Collection that was searched
        collection: Collection,
        /// Record id that had no match
        id: i64,
    },

    /// I/O error from the on-disk store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error for a stored value
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Convenience `Result` type
/// Crate-wide result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

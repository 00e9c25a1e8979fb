//! Error types for cnpj-lookup
//!
//! Failures fall into four families: input validation (caught before any
//! network call), transport failures (collapsed to a generic message),
//! server-reported errors (the service's message passed through verbatim),
//! and local serialization/IO failures from the export path.

use thiserror::Error;

/// Result type alias for cnpj-lookup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cnpj-lookup
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "base_url")
        key: Option<String>,
    },

    /// Batch search submitted with no identifiers
    #[error("no CNPJs provided")]
    EmptyBatch,

    /// Batch search exceeds the configured ceiling
    #[error("too many CNPJs: {count} provided, maximum is {max}")]
    BatchTooLarge {
        /// Number of identifiers submitted
        count: usize,
        /// Configured maximum batch size
        max: usize,
    },

    /// One or more identifiers failed shape validation
    #[error("invalid CNPJ: {0}")]
    InvalidIdentifier(String),

    /// Transport-level failure (connection refused, DNS, timeout)
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response from the lookup service
    #[error("server error ({status}): {message}")]
    Server {
        /// HTTP status code returned by the service
        status: u16,
        /// Server-provided error message, or a generic fallback
        message: String,
    },

    /// Single lookup returned an empty result set
    #[error("company not found: {0}")]
    NotFound(String),

    /// JSON serialization failed
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (artifact save)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for failures the user can fix by correcting their input
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::EmptyBatch | Error::BatchTooLarge { .. } | Error::InvalidIdentifier(_)
        )
    }
}

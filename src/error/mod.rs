//! Error handling for the matching pipeline.

use arrow::error::ArrowError;

/// Errors that can occur while building a matched dataset
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// Input table not set up for matching: treatment column missing, of an
    /// unsupported type, or not a {0, 1} indicator
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A propensity score is missing or outside [0, 1]
    #[error("invalid propensity score: {0}")]
    InvalidScore(String),

    /// The control pool emptied while treated units remained unmatched
    #[error("control pool exhausted after {matched} of {total} treated units were matched")]
    PoolExhausted {
        /// Treated units matched before the pool emptied
        matched: usize,
        /// Treated units in the run
        total: usize,
    },

    /// Arrow error
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),
}

/// Alias for Result with `MatchError`
pub type Result<T> = std::result::Result<T, MatchError>;

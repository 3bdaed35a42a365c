//! A Rust library for constructing propensity-score matched control groups
//! for observational studies.
//!
//! Given a table whose rows split into a treated group and a control pool,
//! plus a per-row probability of treatment assignment, the matching engine
//! pairs every treated row with the previously-unused control row of nearest
//! score and returns the balanced dataset of size 2×|treated|. Matching is
//! greedy, without replacement, and fully deterministic.

pub mod algorithm;
pub mod error;
pub mod scorer;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use algorithm::matching::{
    MatchedPair, Matcher, MatchingResult, MatchingSummary, matched_dataset,
};
pub use error::{MatchError, Result};
pub use scorer::{ColumnScorer, PrescribedScores, PropensityScorer, SCORE_COLUMN};

// Arrow types
pub use arrow::record_batch::RecordBatch;

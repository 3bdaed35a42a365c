//! Greedy propensity-score matching for treated/control study designs
//!
//! This module implements nearest-score matching without replacement:
//!
//! 1. Input validation (treatment indicator and score contract)
//! 2. Unit extraction into treated and control halves
//! 3. The greedy sequential pass over an ordered control pool
//! 4. Matched-dataset assembly (treated rows, then matched controls)
//!
//! Matching is deterministic: treated units are processed in original row
//! order and distance ties resolve to the lowest original row index. The
//! pass is greedy and local, so the pairing depends on treated-row order;
//! reordering the input changes the output.

pub mod extraction;
pub mod filtering;
pub mod matcher;
pub mod pool;
pub mod sequential;
pub mod types;
pub mod validation;

// Re-export key types
pub use matcher::{Matcher, matched_dataset};
pub use pool::ControlPool;
pub use types::{MatchedPair, MatchingResult, MatchingSummary};

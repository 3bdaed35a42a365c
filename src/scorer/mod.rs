//! Propensity score acquisition
//!
//! Score estimation is an external collaborator: anything that can attach
//! one probability-of-treatment value per row satisfies [`PropensityScorer`]
//! and the matching engine consumes the result as plain values. The
//! implementations here cover datasets scored ahead of time; a model-backed
//! scorer (logistic regression and friends) belongs in a downstream crate
//! and plugs into the same trait.

use crate::error::{MatchError, Result};
use crate::utils::arrow_utils;
use arrow::record_batch::RecordBatch;

/// Name of the score column appended to the matched output
pub const SCORE_COLUMN: &str = "SCORE";

/// Capability to produce one propensity score per row of a dataset
///
/// Contract: the returned vector is row-aligned with `data`, one value in
/// [0, 1] per row, no gaps. The matching engine range-checks the result
/// before any matching starts and fails the run if the contract is broken.
pub trait PropensityScorer {
    /// Produce one probability-of-treatment value per row of `data`
    fn score(&self, data: &RecordBatch, treatment_column: &str) -> Result<Vec<f64>>;
}

/// Scorer returning a fixed, caller-supplied score vector
///
/// Used when the estimation step runs elsewhere, and as the deterministic
/// stand-in for model-backed scorers in tests.
#[derive(Debug, Clone)]
pub struct PrescribedScores {
    scores: Vec<f64>,
}

impl PrescribedScores {
    /// Create a scorer from a row-aligned score vector
    #[must_use]
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }
}

impl PropensityScorer for PrescribedScores {
    fn score(&self, data: &RecordBatch, _treatment_column: &str) -> Result<Vec<f64>> {
        if self.scores.len() != data.num_rows() {
            return Err(MatchError::InvalidScore(format!(
                "{} scores prescribed for {} rows",
                self.scores.len(),
                data.num_rows()
            )));
        }

        Ok(self.scores.clone())
    }
}

/// Scorer reading an existing score column of the input batch
///
/// For datasets where a probability column was attached upstream. Cells must
/// be non-null `Float64` or `Float32` values.
#[derive(Debug, Clone)]
pub struct ColumnScorer {
    column: String,
}

impl ColumnScorer {
    /// Create a scorer reading the named column
    #[must_use]
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }
}

impl Default for ColumnScorer {
    fn default() -> Self {
        Self::new(SCORE_COLUMN)
    }
}

impl PropensityScorer for ColumnScorer {
    fn score(&self, data: &RecordBatch, _treatment_column: &str) -> Result<Vec<f64>> {
        let column_idx = data.schema().index_of(&self.column).map_err(|_| {
            MatchError::Configuration(format!("score column {} not found", self.column))
        })?;
        let column = data.column(column_idx);

        let mut scores = Vec::with_capacity(data.num_rows());
        for row in 0..data.num_rows() {
            match arrow_utils::arrow_array_to_f64(column, row) {
                Some(score) => scores.push(score),
                None => {
                    return Err(MatchError::InvalidScore(format!(
                        "column {} has no usable value at row {row}",
                        self.column
                    )));
                }
            }
        }

        Ok(scores)
    }
}

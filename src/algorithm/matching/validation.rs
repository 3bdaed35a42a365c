//! Validation functions for the matching algorithm
//!
//! This module contains functions for validating input data before matching.

use crate::error::{MatchError, Result};
use crate::utils::arrow_utils::TREATMENT_TYPES;
use arrow::record_batch::RecordBatch;

/// Validate that the treatment column exists and has a supported type
pub fn validate_treatment_column(batch: &RecordBatch, column: &str) -> Result<()> {
    let schema = batch.schema();
    let field = schema
        .field_with_name(column)
        .map_err(|_| MatchError::Configuration(format!("treatment column {column} not found")))?;

    if !TREATMENT_TYPES.contains(field.data_type()) {
        return Err(MatchError::Configuration(format!(
            "treatment column {column} has unsupported type {}, expected a boolean or integer indicator",
            field.data_type()
        )));
    }

    Ok(())
}

/// Validate the scorer output: one value per row, every value in [0, 1]
pub fn validate_scores(scores: &[f64], num_rows: usize) -> Result<()> {
    if scores.len() != num_rows {
        return Err(MatchError::InvalidScore(format!(
            "scorer returned {} values for {num_rows} rows",
            scores.len()
        )));
    }

    for (row, &score) in scores.iter().enumerate() {
        // NaN fails the range check as well
        if !(0.0..=1.0).contains(&score) {
            return Err(MatchError::InvalidScore(format!(
                "score {score} at row {row} is outside [0, 1]"
            )));
        }
    }

    Ok(())
}

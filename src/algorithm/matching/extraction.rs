//! Data extraction utilities for the matching algorithm
//!
//! This module turns the input batch into the struct-of-arrays unit lists
//! the matching pass works on.

use crate::algorithm::matching::types::ExtractedUnits;
use crate::error::{MatchError, Result};
use crate::utils::arrow_utils;
use arrow::record_batch::RecordBatch;
use log::warn;

/// Extract `(row, score)` units from `batch`, split by treatment flag
///
/// Rows are visited in batch order, so both halves come out in ascending
/// original row index. Every row must carry a 0 or 1 treatment value, and
/// at least one row must be treated.
pub fn extract_units(
    batch: &RecordBatch,
    treatment_column: &str,
    scores: &[f64],
) -> Result<ExtractedUnits> {
    let treatment_idx = batch.schema().index_of(treatment_column).map_err(|_| {
        MatchError::Configuration(format!("treatment column {treatment_column} not found"))
    })?;
    let treatment_col = batch.column(treatment_idx);

    let mut treated_rows = Vec::new();
    let mut treated_scores = Vec::new();
    let mut control_rows = Vec::new();
    let mut control_scores = Vec::new();

    for row in 0..batch.num_rows() {
        let flag = arrow_utils::arrow_array_to_flag(treatment_col, row).ok_or_else(|| {
            MatchError::Configuration(format!(
                "treatment column {treatment_column} has no usable value at row {row}"
            ))
        })?;

        match flag {
            1 => {
                treated_rows.push(row);
                treated_scores.push(scores[row]);
            }
            0 => {
                control_rows.push(row);
                control_scores.push(scores[row]);
            }
            other => {
                return Err(MatchError::Configuration(format!(
                    "treatment column {treatment_column} holds {other} at row {row}, expected 0 or 1"
                )));
            }
        }
    }

    if treated_rows.is_empty() {
        return Err(MatchError::Configuration(format!(
            "treatment column {treatment_column} marks no rows as treated"
        )));
    }

    if treated_rows.len() > control_rows.len() {
        warn!(
            "{} treated units against a pool of {} controls, matching cannot complete",
            treated_rows.len(),
            control_rows.len()
        );
    }

    Ok(ExtractedUnits {
        treated_rows,
        treated_scores,
        control_rows,
        control_scores,
    })
}

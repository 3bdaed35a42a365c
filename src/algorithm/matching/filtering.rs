//! Batch assembly utilities for the matching algorithm
//!
//! This module provides row selection by index and the score-column append
//! used when building the matched output batch.

use crate::error::{MatchError, Result};
use crate::scorer::SCORE_COLUMN;
use arrow::array::{ArrayRef, BooleanArray, Float64Array};
use arrow::compute;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

/// Filter a `RecordBatch` by row indices
///
/// Keeps the rows named in `indices`; the surviving rows come out in
/// ascending original row order regardless of the order of `indices`.
pub fn filter_batch_by_indices(batch: &RecordBatch, indices: &[usize]) -> Result<RecordBatch> {
    // Create a boolean mask for the selected rows
    let mut mask = vec![false; batch.num_rows()];
    for &idx in indices {
        if idx < mask.len() {
            mask[idx] = true;
        } else {
            return Err(MatchError::Configuration(format!(
                "row index out of bounds: {} >= {}",
                idx,
                mask.len()
            )));
        }
    }

    let bool_array = BooleanArray::from(mask);

    // Apply the mask to all columns
    let filtered_columns = batch
        .columns()
        .iter()
        .map(|col| compute::filter(col, &bool_array))
        .collect::<std::result::Result<Vec<ArrayRef>, _>>()?;

    Ok(RecordBatch::try_new(batch.schema(), filtered_columns)?)
}

/// Attach the score column to `batch`
///
/// The output carries every input column unchanged plus a non-null
/// `Float64` score column appended last. A pre-existing score column (for
/// instance the one a [`crate::scorer::ColumnScorer`] read from) is
/// replaced rather than duplicated.
pub fn with_score_column(batch: &RecordBatch, scores: &[f64]) -> Result<RecordBatch> {
    let schema = batch.schema();

    let mut fields: Vec<Field> = Vec::with_capacity(batch.num_columns() + 1);
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(batch.num_columns() + 1);

    for (field, column) in schema.fields().iter().zip(batch.columns()) {
        if field.name() == SCORE_COLUMN {
            continue;
        }
        fields.push(field.as_ref().clone());
        columns.push(column.clone());
    }

    fields.push(Field::new(SCORE_COLUMN, DataType::Float64, false));
    columns.push(Arc::new(Float64Array::from(scores.to_vec())));

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
}

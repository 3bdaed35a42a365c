//! Core matching orchestration
//!
//! This module implements the Matcher struct which runs the full pipeline:
//! score acquisition, validation, the greedy pass, and output assembly.

use crate::algorithm::matching::extraction::extract_units;
use crate::algorithm::matching::filtering::{filter_batch_by_indices, with_score_column};
use crate::algorithm::matching::pool::ControlPool;
use crate::algorithm::matching::sequential::perform_sequential_matching;
use crate::algorithm::matching::types::MatchingResult;
use crate::algorithm::matching::validation::{validate_scores, validate_treatment_column};
use crate::error::Result;
use crate::scorer::PropensityScorer;
use arrow::compute::concat_batches;
use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use log::info;
use std::time::Instant;

/// Matcher for pairing treated units with controls
///
/// Holds only the treatment-column designation. All per-run state (the
/// available pool, the pair list) is owned by a single `perform_matching`
/// call, so one matcher can serve any number of runs, including concurrent
/// runs over disjoint batches.
#[derive(Debug, Clone)]
pub struct Matcher {
    /// Column whose {0, 1} values split the population
    treatment_column: String,
}

impl Matcher {
    /// Create a new matcher for the given treatment column
    #[must_use]
    pub fn new(treatment_column: impl Into<String>) -> Self {
        Self {
            treatment_column: treatment_column.into(),
        }
    }

    /// Build the matched dataset for `data`
    ///
    /// Scores every row through `scorer`, pairs each treated row with its
    /// nearest unused control, and returns the matched batch together with
    /// the pair list. Fails without partial output if the treatment column
    /// is malformed, any score is invalid, or the control pool runs dry.
    pub fn perform_matching(
        &self,
        data: &RecordBatch,
        scorer: &dyn PropensityScorer,
    ) -> Result<MatchingResult> {
        let start_time = Instant::now();

        validate_treatment_column(data, &self.treatment_column)?;

        let scores = scorer.score(data, &self.treatment_column)?;
        validate_scores(&scores, data.num_rows())?;

        let units = extract_units(data, &self.treatment_column, &scores)?;

        info!(
            "Matching {} treated units against a control pool of {} candidates",
            units.treated_rows.len(),
            units.control_rows.len()
        );

        let mut pool = ControlPool::new(&units.control_scores, &units.control_rows);
        let pairs = perform_sequential_matching(&units, &mut pool)?;

        // Output: treated rows in original order, then matched controls in
        // ascending original row index, with the score column attached
        let scored = with_score_column(data, &scores)?;
        let control_rows: Vec<usize> = pairs
            .iter()
            .map(|pair| pair.control_row)
            .sorted_unstable()
            .collect();

        let treated_batch = filter_batch_by_indices(&scored, &units.treated_rows)?;
        let control_batch = filter_batch_by_indices(&scored, &control_rows)?;
        let matched = concat_batches(&scored.schema(), [&treated_batch, &control_batch])?;

        let elapsed = start_time.elapsed();

        info!(
            "Matching complete: {} treated units matched with {} controls in {:.2?}",
            treated_batch.num_rows(),
            control_batch.num_rows(),
            elapsed
        );

        Ok(MatchingResult {
            matched,
            pairs,
            treated_count: units.treated_rows.len(),
            control_count: units.control_rows.len(),
            matching_time: elapsed,
        })
    }
}

/// Build a propensity-score matched dataset in one call
///
/// Convenience wrapper over [`Matcher::perform_matching`] returning just
/// the matched batch.
pub fn matched_dataset(
    data: &RecordBatch,
    treatment_column: &str,
    scorer: &dyn PropensityScorer,
) -> Result<RecordBatch> {
    let result = Matcher::new(treatment_column).perform_matching(data, scorer)?;
    Ok(result.matched)
}

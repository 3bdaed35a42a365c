//! Type definitions for the matching algorithm
//!
//! This module contains common types used throughout the matching algorithm.

use arrow::record_batch::RecordBatch;
use serde::Serialize;
use std::time::Duration;

/// Pair of matched treated and control units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedPair {
    /// Original row index of the treated unit
    pub treated_row: usize,
    /// Original row index of the matched control unit
    pub control_row: usize,
    /// Absolute propensity-score difference of the pair
    pub score_distance: f64,
}

/// Result of the matching process
#[derive(Debug, Clone)]
pub struct MatchingResult {
    /// Matched dataset: all treated rows in original order, then the
    /// matched control rows in ascending original row index, with the
    /// score column appended
    pub matched: RecordBatch,
    /// Matched pairs in treated processing order
    pub pairs: Vec<MatchedPair>,
    /// Number of treated units
    pub treated_count: usize,
    /// Number of control candidates before matching
    pub control_count: usize,
    /// Time taken for matching
    pub matching_time: Duration,
}

impl MatchingResult {
    /// Summarize the run for reporting
    #[must_use]
    pub fn summary(&self) -> MatchingSummary {
        let mut mean_score_distance = 0.0;
        let mut max_score_distance: f64 = 0.0;

        if !self.pairs.is_empty() {
            mean_score_distance = self.pairs.iter().map(|p| p.score_distance).sum::<f64>()
                / self.pairs.len() as f64;
            max_score_distance = self
                .pairs
                .iter()
                .map(|p| p.score_distance)
                .fold(0.0, f64::max);
        }

        MatchingSummary {
            treated_count: self.treated_count,
            control_pool_count: self.control_count,
            matched_pair_count: self.pairs.len(),
            output_rows: self.matched.num_rows(),
            mean_score_distance,
            max_score_distance,
        }
    }
}

/// Aggregate figures for one matching run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchingSummary {
    /// Treated units in the run
    pub treated_count: usize,
    /// Control candidates before matching
    pub control_pool_count: usize,
    /// Pairs produced
    pub matched_pair_count: usize,
    /// Rows in the matched output batch
    pub output_rows: usize,
    /// Mean absolute score difference across pairs
    pub mean_score_distance: f64,
    /// Largest absolute score difference across pairs
    pub max_score_distance: f64,
}

impl MatchingSummary {
    /// Generate a human-readable summary block
    #[must_use]
    pub fn render(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Matched Dataset Summary:\n");
        summary.push_str(&format!("  Treated Units: {}\n", self.treated_count));
        summary.push_str(&format!("  Control Pool: {}\n", self.control_pool_count));
        summary.push_str(&format!("  Matched Pairs: {}\n", self.matched_pair_count));
        summary.push_str(&format!("  Output Rows: {}\n", self.output_rows));
        summary.push_str(&format!(
            "  Mean Score Distance: {:.4}\n",
            self.mean_score_distance
        ));
        summary.push_str(&format!(
            "  Max Score Distance: {:.4}\n",
            self.max_score_distance
        ));
        summary
    }
}

/// Units extracted from the input batch, split by treatment flag
///
/// Struct-of-arrays layout: `rows[i]` is the original row index for
/// `scores[i]`, both halves in ascending row order.
#[derive(Debug, Clone)]
pub struct ExtractedUnits {
    /// Original row indices of treated units
    pub treated_rows: Vec<usize>,
    /// Scores of treated units
    pub treated_scores: Vec<f64>,
    /// Original row indices of control candidates
    pub control_rows: Vec<usize>,
    /// Scores of control candidates
    pub control_scores: Vec<f64>,
}

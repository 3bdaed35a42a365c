//! Sequential matching pass
//!
//! This module implements the single greedy pass that pairs each treated
//! unit with its nearest available control.

use crate::algorithm::matching::pool::ControlPool;
use crate::algorithm::matching::types::{ExtractedUnits, MatchedPair};
use crate::error::{MatchError, Result};
use crate::utils::progress;
use log::info;

/// Pair every treated unit with its nearest available control
///
/// Treated units are visited in original row order; each match permanently
/// removes the chosen control from `pool`. The choice made for one unit
/// narrows the candidates for the next, so the pass cannot be reordered or
/// parallelized without changing the pairing. Fails the whole run if the
/// pool empties while treated units remain.
pub fn perform_sequential_matching(
    units: &ExtractedUnits,
    pool: &mut ControlPool,
) -> Result<Vec<MatchedPair>> {
    let total = units.treated_rows.len();
    info!("Using sequential processing for {total} treated units");

    let pb = progress::create_matching_progress_bar(total as u64, Some("Matching scores"));

    let mut pairs = Vec::with_capacity(total);

    for (position, (&treated_row, &treated_score)) in units
        .treated_rows
        .iter()
        .zip(&units.treated_scores)
        .enumerate()
    {
        let Some((control_row, score_distance)) = pool.take_nearest(treated_score) else {
            return Err(MatchError::PoolExhausted {
                matched: position,
                total,
            });
        };

        pairs.push(MatchedPair {
            treated_row,
            control_row,
            score_distance,
        });

        pb.inc(1);
        if position % 100 == 0 {
            pb.set_message(format!("Found {} matches", pairs.len()));
        }
    }

    progress::finish_progress_bar(&pb, Some("Matching complete"));

    Ok(pairs)
}

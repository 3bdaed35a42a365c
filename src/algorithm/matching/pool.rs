//! Available-control pool for the matching algorithm
//!
//! This module implements the ordered set of not-yet-matched control units,
//! keyed by (score, original row index) so that nearest-score lookup,
//! removal and the lowest-row tie-break are all O(log n) range operations.

use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Ordered pool of available control units
///
/// Each entry is `(score, original row index)`. Entries with equal scores
/// stay grouped and ordered by ascending row index. The pool is its own
/// exclusion set: taking a unit removes it, so no control is matched twice.
#[derive(Debug, Clone, Default)]
pub struct ControlPool {
    available: BTreeSet<(OrderedFloat<f64>, usize)>,
}

impl ControlPool {
    /// Build a pool from parallel score and row-index arrays
    #[must_use]
    pub fn new(scores: &[f64], rows: &[usize]) -> Self {
        let available = scores
            .iter()
            .zip(rows)
            .map(|(&score, &row)| (OrderedFloat(score), row))
            .collect();

        Self { available }
    }

    /// Number of controls still available
    #[must_use]
    pub fn len(&self) -> usize {
        self.available.len()
    }

    /// Check if the pool is exhausted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// Remove and return the available control nearest to `score`
    ///
    /// Returns `(original row index, absolute score difference)`, or `None`
    /// when the pool is exhausted. Distance ties resolve to the lowest
    /// original row index, whichever side of `score` it sits on.
    pub fn take_nearest(&mut self, score: f64) -> Option<(usize, f64)> {
        let target = OrderedFloat(score);

        // First entry of the run at the nearest score at or below the target
        let below = self
            .available
            .range(..=(target, usize::MAX))
            .next_back()
            .map(|&(s, _)| s)
            .and_then(|s| self.available.range((s, 0)..).next().copied());

        // First entry of the run at the nearest score at or above the target
        let above = self.available.range((target, 0)..).next().copied();

        let chosen = match (below, above) {
            (None, None) => return None,
            (Some(entry), None) | (None, Some(entry)) => entry,
            (Some(b), Some(a)) => {
                let below_dist = (score - b.0.into_inner()).abs();
                let above_dist = (a.0.into_inner() - score).abs();
                match below_dist.partial_cmp(&above_dist) {
                    Some(Ordering::Less) => b,
                    Some(Ordering::Greater) => a,
                    // Equal distance: lowest original row index wins
                    _ => {
                        if b.1 <= a.1 {
                            b
                        } else {
                            a
                        }
                    }
                }
            }
        };

        self.available.remove(&chosen);
        Some((chosen.1, (chosen.0.into_inner() - score).abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_nearest_from_below() {
        let mut pool = ControlPool::new(&[0.25, 0.75], &[5, 9]);
        assert_eq!(pool.take_nearest(0.375), Some((5, 0.125)));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn takes_nearest_from_above() {
        let mut pool = ControlPool::new(&[0.25, 0.75], &[5, 9]);
        assert_eq!(pool.take_nearest(0.625), Some((9, 0.125)));
    }

    #[test]
    fn exact_hit_costs_nothing() {
        let mut pool = ControlPool::new(&[0.25, 0.5, 0.75], &[1, 2, 3]);
        assert_eq!(pool.take_nearest(0.5), Some((2, 0.0)));
    }

    #[test]
    fn distance_tie_resolves_to_lowest_row() {
        // 0.25 and 0.75 are both exactly 0.25 away from 0.5
        let mut pool = ControlPool::new(&[0.75, 0.25], &[1, 2]);
        assert_eq!(pool.take_nearest(0.5), Some((1, 0.25)));

        let mut pool = ControlPool::new(&[0.25, 0.75], &[1, 2]);
        assert_eq!(pool.take_nearest(0.5), Some((1, 0.25)));
    }

    #[test]
    fn equal_scores_resolve_to_lowest_row() {
        let mut pool = ControlPool::new(&[0.375, 0.375, 0.375], &[7, 3, 5]);
        assert_eq!(pool.take_nearest(0.5), Some((3, 0.125)));
        assert_eq!(pool.take_nearest(0.5), Some((5, 0.125)));
        assert_eq!(pool.take_nearest(0.5), Some((7, 0.125)));
    }

    #[test]
    fn taken_units_are_never_reused() {
        let mut pool = ControlPool::new(&[0.4, 0.45], &[0, 1]);
        assert_eq!(pool.take_nearest(0.44).map(|(row, _)| row), Some(1));
        assert_eq!(pool.take_nearest(0.44).map(|(row, _)| row), Some(0));
        assert_eq!(pool.take_nearest(0.44), None);
        assert!(pool.is_empty());
    }
}

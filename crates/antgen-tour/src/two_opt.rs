//! 2-opt local search with pinned endpoints.
//!
//! Both strategies use first improvement: the first accepted reversal ends
//! the scan and a new scan starts from the top. The search stops after a
//! scan that accepts nothing, which must happen because tour cost is a
//! non-negative integer that strictly drops on every acceptance.

use crate::tour::Tour;
use antgen_core::Point;
use antgen_space::GridSpec;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// How a candidate reversal is judged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwoOptStrategy {
    /// Compare the four affected edge lengths under the grid metric.
    /// O(1) per candidate.
    #[default]
    RawDistance,
    /// Apply the reversal, re-expand the whole tour into unit moves, and
    /// keep it only if the move sequence is strictly shorter than the best
    /// seen so far. The best length is updated in the same step that
    /// accepts the reversal; rejected reversals are undone. O(L) per
    /// candidate for a tour of L moves.
    ExpandedMoves,
}

/// What a call to [`optimize`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OptimizeStats {
    /// Scans started, including the final one that accepted nothing.
    pub passes: u32,
    /// Reversals accepted.
    pub swaps: u32,
    /// Tour cost before optimization.
    pub cost_before: u64,
    /// Tour cost after optimization.
    pub cost_after: u64,
}

/// Improve `tour` in place until no 2-opt reversal helps.
///
/// For every `1 <= i < k <= len - 2` with `a, b, c, d` =
/// `tour[i-1], tour[i], tour[k], tour[k+1]`, reversing `tour[i..=k]`
/// replaces edges `a-b` and `c-d` with `a-c` and `b-d`. Tours with fewer
/// than two interior points are returned untouched.
pub fn optimize(tour: &mut Tour, spec: &GridSpec, strategy: TwoOptStrategy) -> OptimizeStats {
    let cost_before = tour.cost(spec);
    let mut stats = OptimizeStats {
        cost_before,
        cost_after: cost_before,
        ..OptimizeStats::default()
    };
    if tour.interior().len() < 2 {
        return stats;
    }

    match strategy {
        TwoOptStrategy::RawDistance => raw_distance(tour, spec, &mut stats),
        TwoOptStrategy::ExpandedMoves => expanded_moves(tour, spec, &mut stats),
    }

    stats.cost_after = tour.cost(spec);
    debug!(
        ?strategy,
        points = tour.len(),
        passes = stats.passes,
        swaps = stats.swaps,
        cost_before = stats.cost_before,
        cost_after = stats.cost_after,
        "2-opt converged"
    );
    stats
}

fn raw_distance(tour: &mut Tour, spec: &GridSpec, stats: &mut OptimizeStats) {
    let n = tour.len();
    loop {
        stats.passes += 1;
        match first_raw_improvement(tour.points(), spec, n) {
            Some((i, k, gain)) => {
                tour.reverse_segment(i, k);
                stats.swaps += 1;
                trace!(i, k, gain, "accepted reversal");
            }
            None => break,
        }
    }
}

fn first_raw_improvement(
    pts: &[Point],
    spec: &GridSpec,
    n: usize,
) -> Option<(usize, usize, u32)> {
    for i in 1..n - 2 {
        for k in i + 1..=n - 2 {
            let (a, b, c, d) = (pts[i - 1], pts[i], pts[k], pts[k + 1]);
            let before = spec.distance(a, b) + spec.distance(c, d);
            let after = spec.distance(a, c) + spec.distance(b, d);
            if after < before {
                return Some((i, k, before - after));
            }
        }
    }
    None
}

fn expanded_moves(tour: &mut Tour, spec: &GridSpec, stats: &mut OptimizeStats) {
    let n = tour.len();
    let mut best = spec.expand_path(tour.points()).len();
    loop {
        stats.passes += 1;
        let mut improved = false;
        'scan: for i in 1..n - 2 {
            for k in i + 1..=n - 2 {
                tour.reverse_segment(i, k);
                let len = spec.expand_path(tour.points()).len();
                if len < best {
                    trace!(i, k, from = best, to = len, "accepted reversal");
                    best = len;
                    stats.swaps += 1;
                    improved = true;
                    break 'scan;
                }
                tour.reverse_segment(i, k);
            }
        }
        if !improved {
            break;
        }
    }
}

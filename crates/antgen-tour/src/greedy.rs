//! Nearest-neighbour tour construction.

use crate::tour::Tour;
use antgen_core::Point;
use antgen_space::{DirtyPointSet, GridSpec};

/// Build a tour from `start` through every point of `remaining` to `end`,
/// always stepping to the nearest unvisited point.
///
/// `remaining` is consumed. Points equal to `start` or `end` are dropped
/// from it first and get no stop of their own. Distance ties go to the
/// point that comes first in the set's iteration order. O(n²).
///
/// The result is a valid Hamiltonian path over the dirty points; nothing
/// more is guaranteed about its length.
pub fn construct(mut remaining: DirtyPointSet, start: Point, end: Point, spec: &GridSpec) -> Tour {
    remaining.shift_remove(&start);
    remaining.shift_remove(&end);

    let mut points = Vec::with_capacity(remaining.len() + 2);
    points.push(start);

    let mut current = start;
    while !remaining.is_empty() {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;
        for (i, &candidate) in remaining.iter().enumerate() {
            let d = spec.distance(current, candidate);
            if d < best_dist {
                best_dist = d;
                best_idx = i;
            }
        }
        // Index came from iterating the set, so it is in range.
        if let Some(next) = remaining.shift_remove_index(best_idx) {
            points.push(next);
            current = next;
        }
    }

    points.push(end);
    // The set guarantees distinct interior points, none equal to an endpoint.
    Tour::from_validated(points)
}

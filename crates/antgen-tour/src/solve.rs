//! Greedy construction followed by 2-opt, with timings.

use crate::calibrate::CalibrationSample;
use crate::greedy;
use crate::tour::Tour;
use crate::two_opt::{self, OptimizeStats, TwoOptStrategy};
use antgen_core::Point;
use antgen_space::{DirtyPointSet, GridSpec};
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of [`solve`].
#[derive(Clone, Debug)]
pub struct TourReport {
    /// The optimized tour.
    pub tour: Tour,
    /// Number of interior points placed.
    pub num_points: usize,
    /// Cost of the greedy tour before 2-opt.
    pub greedy_cost: u64,
    /// What the optimizer did.
    pub stats: OptimizeStats,
    /// Wall time spent in greedy construction.
    pub greedy_time: Duration,
    /// Wall time spent in 2-opt.
    pub two_opt_time: Duration,
}

impl TourReport {
    /// Greedy plus 2-opt wall time.
    pub fn total_time(&self) -> Duration {
        self.greedy_time + self.two_opt_time
    }

    /// This run as a calibration measurement.
    pub fn sample(&self) -> CalibrationSample {
        CalibrationSample {
            num_points: self.num_points,
            greedy_ms: self.greedy_time.as_secs_f64() * 1000.0,
            two_opt_ms: self.two_opt_time.as_secs_f64() * 1000.0,
            total_ms: self.total_time().as_secs_f64() * 1000.0,
        }
    }
}

/// Build a greedy tour over `dirty` and improve it with 2-opt.
///
/// The optimizer never returns a tour longer than the greedy one, so the
/// greedy tour is the implicit fallback.
pub fn solve(
    dirty: DirtyPointSet,
    start: Point,
    end: Point,
    spec: &GridSpec,
    strategy: TwoOptStrategy,
) -> TourReport {
    let greedy_started = Instant::now();
    let mut tour = greedy::construct(dirty, start, end, spec);
    let greedy_time = greedy_started.elapsed();
    let greedy_cost = tour.cost(spec);

    let two_opt_started = Instant::now();
    let stats = two_opt::optimize(&mut tour, spec, strategy);
    let two_opt_time = two_opt_started.elapsed();

    let num_points = tour.interior().len();
    debug!(
        num_points,
        greedy_cost,
        optimized_cost = stats.cost_after,
        greedy_us = greedy_time.as_micros() as u64,
        two_opt_us = two_opt_time.as_micros() as u64,
        "tour solved"
    );

    TourReport {
        tour,
        num_points,
        greedy_cost,
        stats,
        greedy_time,
        two_opt_time,
    }
}

//! Runtime estimation for [`solve`](fn@crate::solve).
//!
//! The model is `n² · greedy_constant` for construction plus
//! `n² · min(n, 50) · two_opt_constant` for 2-opt, in milliseconds. The
//! constants are machine-specific and live in a versioned
//! [`TimingConstants`] record so they can be recalibrated and persisted.

use serde::{Deserialize, Serialize};

/// Cap on the modelled number of 2-opt passes.
pub const MAX_MODELLED_PASSES: usize = 50;

/// Tunable constants of the runtime model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConstants {
    /// Record format version.
    pub version: u32,
    /// Milliseconds per `n²` of greedy construction.
    pub greedy_constant: f64,
    /// Milliseconds per `n² · passes` of 2-opt.
    pub two_opt_constant: f64,
}

impl TimingConstants {
    /// Record format version this build reads and writes.
    pub const CURRENT_VERSION: u32 = 1;

    /// Whether both constants are finite and positive.
    pub fn is_valid(&self) -> bool {
        self.greedy_constant.is_finite()
            && self.greedy_constant > 0.0
            && self.two_opt_constant.is_finite()
            && self.two_opt_constant > 0.0
    }

    /// Predict the runtime of [`solve`](fn@crate::solve) for `num_points`.
    ///
    /// # Examples
    ///
    /// ```
    /// use antgen_tour::{Complexity, TimingConstants};
    ///
    /// let est = TimingConstants::default().estimate(100);
    /// assert_eq!(est.iterations, 50);
    /// assert_eq!(est.greedy_ms, 1.0);
    /// assert_eq!(est.two_opt_ms, 5.0);
    /// assert_eq!(est.complexity, Complexity::Medium);
    /// ```
    pub fn estimate(&self, num_points: usize) -> TimingEstimate {
        let n = num_points as f64;
        let iterations = num_points.min(MAX_MODELLED_PASSES);
        let greedy = n * n * self.greedy_constant;
        let two_opt = n * n * iterations as f64 * self.two_opt_constant;
        TimingEstimate {
            estimated_ms: round2(greedy + two_opt),
            greedy_ms: round2(greedy),
            two_opt_ms: round2(two_opt),
            iterations,
            complexity: Complexity::for_points(num_points),
        }
    }
}

impl Default for TimingConstants {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            greedy_constant: 1e-4,
            two_opt_constant: 1e-5,
        }
    }
}

/// Coarse size bucket for a point count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Complexity {
    /// Fewer than 100 points.
    Low,
    /// 100 to 499 points.
    Medium,
    /// 500 points or more.
    High,
}

impl Complexity {
    /// Bucket for `num_points`.
    pub fn for_points(num_points: usize) -> Self {
        if num_points < 100 {
            Complexity::Low
        } else if num_points < 500 {
            Complexity::Medium
        } else {
            Complexity::High
        }
    }
}

/// Output of [`TimingConstants::estimate`]. Times are rounded to 0.01 ms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingEstimate {
    /// Total predicted milliseconds.
    pub estimated_ms: f64,
    /// Predicted greedy milliseconds.
    pub greedy_ms: f64,
    /// Predicted 2-opt milliseconds.
    pub two_opt_ms: f64,
    /// Modelled number of 2-opt passes.
    pub iterations: usize,
    /// Size bucket.
    pub complexity: Complexity,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

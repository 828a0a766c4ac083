//! Fitting [`TimingConstants`] to measured runs.
//!
//! Fitting is pure: callers collect [`CalibrationSample`]s (for example
//! from [`TourReport::sample`](crate::TourReport::sample)) and hand them in.
//! Each constant is scaled by the ratio of total measured time to total
//! predicted time for its phase.

use crate::estimate::{TimingConstants, MAX_MODELLED_PASSES};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One measured run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalibrationSample {
    /// Interior points in the tour.
    pub num_points: usize,
    /// Measured greedy milliseconds.
    pub greedy_ms: f64,
    /// Measured 2-opt milliseconds.
    pub two_opt_ms: f64,
    /// Measured total milliseconds.
    pub total_ms: f64,
}

/// How this machine compares with the baseline constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceClass {
    /// Runs in under half the predicted time.
    High,
    /// Within 1.5x of prediction.
    Standard,
    /// Up to 3x slower than predicted.
    Lower,
    /// More than 3x slower than predicted.
    VeryLow,
}

impl PerformanceClass {
    /// Bucket a mean measured/predicted ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < 0.5 {
            PerformanceClass::High
        } else if ratio < 1.5 {
            PerformanceClass::Standard
        } else if ratio < 3.0 {
            PerformanceClass::Lower
        } else {
            PerformanceClass::VeryLow
        }
    }
}

/// Result of [`fit_constants`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalibratedConstants {
    /// The fitted constants.
    pub constants: TimingConstants,
    /// Factor applied to the baseline greedy constant.
    pub greedy_scale: f64,
    /// Factor applied to the baseline 2-opt constant.
    pub two_opt_scale: f64,
    /// Mean of per-sample measured/predicted total ratios.
    pub mean_ratio: f64,
    /// Class derived from `mean_ratio`.
    pub class: PerformanceClass,
}

/// Fit `baseline` to `samples`.
///
/// Returns `None` when the baseline is invalid or when the samples predict
/// zero time for either phase (no sample has more than zero points).
/// Samples with zero points are ignored in the mean ratio.
pub fn fit_constants(
    baseline: &TimingConstants,
    samples: &[CalibrationSample],
) -> Option<CalibratedConstants> {
    if !baseline.is_valid() {
        return None;
    }

    let mut greedy_actual = 0.0;
    let mut greedy_predicted = 0.0;
    let mut two_opt_actual = 0.0;
    let mut two_opt_predicted = 0.0;
    let mut ratio_sum = 0.0;
    let mut ratio_count = 0usize;

    for s in samples {
        let n = s.num_points as f64;
        let passes = s.num_points.min(MAX_MODELLED_PASSES) as f64;
        let g = n * n * baseline.greedy_constant;
        let t = n * n * passes * baseline.two_opt_constant;
        greedy_actual += s.greedy_ms;
        greedy_predicted += g;
        two_opt_actual += s.two_opt_ms;
        two_opt_predicted += t;
        if g + t > 0.0 {
            ratio_sum += s.total_ms / (g + t);
            ratio_count += 1;
        }
    }

    if greedy_predicted <= 0.0 || two_opt_predicted <= 0.0 || ratio_count == 0 {
        return None;
    }

    let greedy_scale = greedy_actual / greedy_predicted;
    let two_opt_scale = two_opt_actual / two_opt_predicted;
    let constants = TimingConstants {
        version: TimingConstants::CURRENT_VERSION,
        greedy_constant: baseline.greedy_constant * greedy_scale,
        two_opt_constant: baseline.two_opt_constant * two_opt_scale,
    };
    let mean_ratio = ratio_sum / ratio_count as f64;
    let class = PerformanceClass::from_ratio(mean_ratio);

    debug!(
        samples = samples.len(),
        greedy_scale,
        two_opt_scale,
        mean_ratio,
        ?class,
        "fitted timing constants"
    );

    Some(CalibratedConstants {
        constants,
        greedy_scale,
        two_opt_scale,
        mean_ratio,
        class,
    })
}

//! Tour construction and improvement for antgen.
//!
//! A [`Tour`] visits every dirty cell exactly once between a pinned start
//! and a pinned end. [`greedy::construct`] builds one by nearest-neighbour
//! selection; [`two_opt::optimize`] shortens it by segment reversal under
//! either [`TwoOptStrategy`]. [`solve()`] runs both and reports timings.
//!
//! [`estimate`] and [`calibrate`] predict runtime from the point count
//! using constants stored in a [`TimingConstants`] record.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod calibrate;
pub mod error;
pub mod estimate;
pub mod greedy;
pub mod solve;
pub mod tour;
pub mod two_opt;

pub use calibrate::{fit_constants, CalibratedConstants, CalibrationSample, PerformanceClass};
pub use error::TourError;
pub use estimate::{Complexity, TimingConstants, TimingEstimate};
pub use solve::{solve, TourReport};
pub use tour::Tour;
pub use two_opt::{OptimizeStats, TwoOptStrategy};

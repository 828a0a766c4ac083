//! Error types for tour construction.

use antgen_core::{ErrorKind, Point};
use thiserror::Error;

/// Errors from building or validating a [`Tour`](crate::Tour).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TourError {
    /// A tour needs at least a start and an end.
    #[error("tour needs at least 2 points, got {len}")]
    EmptyInput {
        /// Number of points supplied.
        len: usize,
    },
    /// An interior point repeats, or repeats an endpoint.
    #[error("point {0} appears more than once in the tour")]
    DuplicatePoint(Point),
}

impl TourError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput { .. } => ErrorKind::EmptyInput,
            Self::DuplicatePoint(_) => ErrorKind::InvalidArgument,
        }
    }
}

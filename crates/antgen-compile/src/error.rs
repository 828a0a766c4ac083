//! Error types for program compilation.

use antgen_core::{CoreError, ErrorKind, Point, StateId};
use antgen_space::SpaceError;
use thiserror::Error;

/// Errors from compiling a tour into a rule program.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CompileError {
    /// A required anchor has not been set on the grid.
    #[error("{anchor} anchor is not set; set it or enable lazy anchoring")]
    UninitializedState {
        /// `"start"` or `"end"`.
        anchor: &'static str,
    },
    /// The tour does not finish on the grid's end anchor.
    #[error("tour ends at {tour_end} but the end anchor is {anchor}")]
    EndpointMismatch {
        /// Last point of the tour.
        tour_end: Point,
        /// Normalized end anchor.
        anchor: Point,
    },
    /// Compiling into an existing program would overwrite a state.
    #[error("state {0} already has rules")]
    StateCollision(StateId),
    /// The program would need state ids beyond `u32::MAX`.
    #[error("{needed} states starting at {start} overflow the state id range")]
    StateOverflow {
        /// First state id.
        start: StateId,
        /// Number of states required.
        needed: usize,
    },
    /// A core value failed to parse.
    #[error(transparent)]
    Core(#[from] CoreError),
    /// Grid construction or rasterization failed.
    #[error(transparent)]
    Space(#[from] SpaceError),
}

impl CompileError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UninitializedState { .. } => ErrorKind::UninitializedState,
            Self::EndpointMismatch { .. }
            | Self::StateCollision(_)
            | Self::StateOverflow { .. } => ErrorKind::InvalidArgument,
            Self::Core(e) => e.kind(),
            Self::Space(e) => e.kind(),
        }
    }
}

//! The two-rule tail that leaves the ant facing a chosen heading.
//!
//! The ant steps away from the end cell and straight back, so it finishes
//! on the end cell having last moved in the requested direction. Each
//! rule rewrites the color already on the cell it leaves.

use antgen_core::{Heading, Move};

/// One epilogue rule: the move, and the offset from the end cell of the
/// cell whose color it writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlignmentStep {
    /// Unit move taken.
    pub step: Move,
    /// Offset from the end cell of the cell being left.
    pub offset: (i32, i32),
}

/// Epilogue for `heading`.
///
/// ```
/// use antgen_compile::alignment;
/// use antgen_core::{Heading, Move};
///
/// let [away, back] = alignment(Heading::Right);
/// assert_eq!(away.step, Move::NegativeX);
/// assert_eq!(back.step, Move::PositiveX);
/// assert_eq!(back.offset, (-1, 0));
/// ```
pub fn alignment(heading: Heading) -> [AlignmentStep; 2] {
    let facing = heading.facing_move();
    let away = facing.reverse();
    let (ax, ay) = away.offset_2d();
    [
        AlignmentStep {
            step: away,
            offset: (0, 0),
        },
        AlignmentStep {
            step: facing,
            offset: (ax, ay),
        },
    ]
}

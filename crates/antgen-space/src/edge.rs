//! Grid boundary behavior.

use serde::{Deserialize, Serialize};

/// How coordinates and displacements behave at the grid edges.
///
/// # Examples
///
/// ```
/// use antgen_core::Point;
/// use antgen_space::{EdgeBehavior, GridSpec};
///
/// let wrap = GridSpec::new(10, 10, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(wrap.distance(Point::new(0, 0), Point::new(9, 9)), 2);
///
/// let clamp = GridSpec::new(10, 10, EdgeBehavior::Clamp).unwrap();
/// assert_eq!(clamp.distance(Point::new(0, 0), Point::new(9, 9)), 18);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeBehavior {
    /// Out-of-bounds coordinates clamp to the boundary cell; displacements
    /// never wrap.
    Clamp,
    /// Out-of-bounds coordinates wrap to the opposite side (torus);
    /// displacements take the shorter way round.
    #[default]
    Wrap,
}

impl EdgeBehavior {
    /// Map the `looping` flag onto an edge behavior.
    pub fn from_looping(looping: bool) -> Self {
        if looping {
            EdgeBehavior::Wrap
        } else {
            EdgeBehavior::Clamp
        }
    }

    /// `true` for [`EdgeBehavior::Wrap`].
    pub fn is_looping(self) -> bool {
        matches!(self, EdgeBehavior::Wrap)
    }
}

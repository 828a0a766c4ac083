//! Grid coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate on the grid.
///
/// `x` indexes columns and `y` indexes rows; `+y` points down the screen.
/// Points handed to the tour and compiler stages are always normalized
/// into `[0, cols) x [0, rows)` by the owning grid first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Point {
    /// Create a point from raw coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by `(dx, dy)` without any boundary handling.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_unbounded() {
        let p = Point::new(0, 0).offset(-1, 3);
        assert_eq!(p, Point::new(-1, 3));
    }

    #[test]
    fn display_and_tuple_conversion() {
        let p: Point = (4, 7).into();
        assert_eq!(p.to_string(), "(4, 7)");
    }

    #[test]
    fn serializes_as_plain_object() {
        let json = serde_json::to_string(&Point::new(2, 5)).unwrap();
        assert_eq!(json, r#"{"x":2,"y":5}"#);
    }
}

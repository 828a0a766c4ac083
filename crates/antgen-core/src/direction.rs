//! Unit moves and final headings.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single axis-aligned unit step of the ant.
///
/// Serialized with the simulator's terse tokens: `>` `<` `v` `^`.
/// `+y` is screen-down, so [`Move::PositiveY`] is `v`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// One column right (`x + 1`).
    #[serde(rename = ">")]
    PositiveX,
    /// One column left (`x - 1`).
    #[serde(rename = "<")]
    NegativeX,
    /// One row down (`y + 1`).
    #[serde(rename = "v")]
    PositiveY,
    /// One row up (`y - 1`).
    #[serde(rename = "^")]
    NegativeY,
}

impl Move {
    /// Returns the `(dx, dy)` offset for this move.
    pub fn offset_2d(self) -> (i32, i32) {
        match self {
            Move::PositiveX => (1, 0),
            Move::NegativeX => (-1, 0),
            Move::PositiveY => (0, 1),
            Move::NegativeY => (0, -1),
        }
    }

    /// The move that undoes this one.
    pub fn reverse(self) -> Self {
        match self {
            Move::PositiveX => Move::NegativeX,
            Move::NegativeX => Move::PositiveX,
            Move::PositiveY => Move::NegativeY,
            Move::NegativeY => Move::PositiveY,
        }
    }

    /// Move along x toward the sign of `dx` (`dx == 0` picks `NegativeX`).
    pub fn along_x(dx: i32) -> Self {
        if dx > 0 {
            Move::PositiveX
        } else {
            Move::NegativeX
        }
    }

    /// Move along y toward the sign of `dy` (`dy == 0` picks `NegativeY`).
    pub fn along_y(dy: i32) -> Self {
        if dy > 0 {
            Move::PositiveY
        } else {
            Move::NegativeY
        }
    }

    /// The simulator token for this move.
    pub fn token(self) -> &'static str {
        match self {
            Move::PositiveX => ">",
            Move::NegativeX => "<",
            Move::PositiveY => "v",
            Move::NegativeY => "^",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Move {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">" => Ok(Move::PositiveX),
            "<" => Ok(Move::NegativeX),
            "v" => Ok(Move::PositiveY),
            "^" => Ok(Move::NegativeY),
            other => Err(CoreError::UnknownMove(other.to_string())),
        }
    }
}

/// The direction the ant should face once the program finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    /// Facing `+x`.
    #[default]
    Right,
    /// Facing `-x`.
    Left,
    /// Facing `-y`.
    Up,
    /// Facing `+y`.
    Down,
}

impl Heading {
    /// All four headings in declaration order.
    pub const ALL: [Heading; 4] = [Heading::Right, Heading::Left, Heading::Up, Heading::Down];

    /// The move that leaves the ant facing this heading.
    pub fn facing_move(self) -> Move {
        match self {
            Heading::Right => Move::PositiveX,
            Heading::Left => Move::NegativeX,
            Heading::Up => Move::NegativeY,
            Heading::Down => Move::PositiveY,
        }
    }

    /// Lowercase name as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Heading::Right => "right",
            Heading::Left => "left",
            Heading::Up => "up",
            Heading::Down => "down",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heading {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "right" => Ok(Heading::Right),
            "left" => Ok(Heading::Left),
            "up" => Ok(Heading::Up),
            "down" => Ok(Heading::Down),
            _ => Err(CoreError::UnknownHeading(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn reverse_cancels_offset() {
        for m in [Move::PositiveX, Move::NegativeX, Move::PositiveY, Move::NegativeY] {
            let (ax, ay) = m.offset_2d();
            let (bx, by) = m.reverse().offset_2d();
            assert_eq!((ax + bx, ay + by), (0, 0));
        }
    }

    #[test]
    fn tokens_round_trip_through_from_str() {
        for m in [Move::PositiveX, Move::NegativeX, Move::PositiveY, Move::NegativeY] {
            assert_eq!(m.token().parse::<Move>().unwrap(), m);
        }
        assert!(matches!("x".parse::<Move>(), Err(CoreError::UnknownMove(_))));
    }

    #[test]
    fn move_serializes_as_token() {
        assert_eq!(serde_json::to_string(&Move::PositiveY).unwrap(), r#""v""#);
        let m: Move = serde_json::from_str(r#""<""#).unwrap();
        assert_eq!(m, Move::NegativeX);
    }

    #[test]
    fn heading_parse_is_case_insensitive() {
        assert_eq!("Up".parse::<Heading>().unwrap(), Heading::Up);
        assert_eq!("DOWN".parse::<Heading>().unwrap(), Heading::Down);
    }

    #[test]
    fn unknown_heading_is_invalid_argument() {
        let err = "north".parse::<Heading>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("north"));
    }

    #[test]
    fn facing_move_matches_heading_axis() {
        assert_eq!(Heading::Right.facing_move(), Move::PositiveX);
        assert_eq!(Heading::Up.facing_move(), Move::NegativeY);
    }
}

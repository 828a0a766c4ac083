//! Displacement and distance on a `cols x rows` grid.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use antgen_core::{Move, Point};
use serde::{Deserialize, Serialize};
use std::iter;

/// Shortest signed displacement from `p1` to `p2` along one wrapping axis.
///
/// Computes `(p2 - p1) mod size` and, when that exceeds `size / 2`,
/// subtracts `size` to go the other way round. The result always satisfies
/// `|delta| <= size / 2`. An exact half-turn on an even axis resolves to
/// the positive direction. A zero-length axis is treated as degenerate
/// and yields 0, as does `size == 1`.
///
/// ```
/// use antgen_space::delta;
///
/// assert_eq!(delta(1, 8, 10), -3);
/// assert_eq!(delta(8, 1, 10), 3);
/// assert_eq!(delta(0, 5, 10), 5);
/// assert_eq!(delta(3, 0, 1), 0);
/// ```
pub fn delta(p1: i32, p2: i32, size: u32) -> i32 {
    if size == 0 {
        return 0;
    }
    let n = i64::from(size);
    let mut d = (i64::from(p2) - i64::from(p1)).rem_euclid(n);
    if 2 * d > n {
        d -= n;
    }
    d as i32
}

/// Resolve a single axis value under the given edge behavior.
pub(crate) fn resolve_axis(val: i32, len: u32, edge: EdgeBehavior) -> i32 {
    let n = i64::from(len);
    let v = i64::from(val);
    if v >= 0 && v < n {
        return val;
    }
    match edge {
        EdgeBehavior::Clamp => v.clamp(0, n - 1) as i32,
        EdgeBehavior::Wrap => v.rem_euclid(n) as i32,
    }
}

/// Per-axis displacement and Manhattan length between two points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Displacement {
    /// `|dx| + |dy|`.
    pub dist: u32,
    /// Signed column displacement.
    pub dx: i32,
    /// Signed row displacement.
    pub dy: i32,
}

impl Displacement {
    /// Build a displacement from its axis components.
    pub fn new(dx: i32, dy: i32) -> Self {
        Self {
            dist: dx.unsigned_abs() + dy.unsigned_abs(),
            dx,
            dy,
        }
    }

    /// Unit moves realizing this displacement: all x moves, then all y moves.
    pub fn moves(&self) -> impl Iterator<Item = Move> {
        let x = iter::repeat_n(Move::along_x(self.dx), self.dx.unsigned_abs() as usize);
        let y = iter::repeat_n(Move::along_y(self.dy), self.dy.unsigned_abs() as usize);
        x.chain(y)
    }
}

/// Grid dimensions plus edge behavior: the metric every stage shares.
///
/// Construction validates the dimensions once; every method afterwards is
/// infallible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSpec {
    cols: u32,
    rows: u32,
    edge: EdgeBehavior,
}

impl GridSpec {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Maximum number of cells a grid may hold.
    pub const MAX_CELLS: usize = 1 << 28;

    /// Create a grid spec with `cols * rows` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0,
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`, or
    /// `Err(SpaceError::TooManyCells)` if the product exceeds [`Self::MAX_CELLS`].
    pub fn new(cols: u32, rows: u32, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        if cols == 0 || rows == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if cols > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        if rows > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        let cells = (cols as usize).checked_mul(rows as usize);
        if cells.is_none_or(|n| n > Self::MAX_CELLS) {
            return Err(SpaceError::TooManyCells {
                cols,
                rows,
                max: Self::MAX_CELLS,
            });
        }
        Ok(Self { cols, rows, edge })
    }

    /// Number of columns (x extent).
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of rows (y extent).
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.cols as usize) * (self.rows as usize)
    }

    /// Wrap or clamp `p` into `[0, cols) x [0, rows)`.
    pub fn normalize(&self, p: Point) -> Point {
        Point {
            x: resolve_axis(p.x, self.cols, self.edge),
            y: resolve_axis(p.y, self.rows, self.edge),
        }
    }

    /// Whether `p` already lies inside the grid.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && (p.x as u32) < self.cols && p.y >= 0 && (p.y as u32) < self.rows
    }

    /// Row-major flat index of a point; the point is normalized first.
    pub fn index_of(&self, p: Point) -> usize {
        let p = self.normalize(p);
        (p.y as usize) * (self.cols as usize) + (p.x as usize)
    }

    /// Displacement from `from` to `to`.
    ///
    /// Wrap mode takes the shorter way round on each axis; clamp mode uses
    /// the plain difference between the clamped points.
    pub fn displacement(&self, from: Point, to: Point) -> Displacement {
        match self.edge {
            EdgeBehavior::Wrap => Displacement::new(
                delta(from.x, to.x, self.cols),
                delta(from.y, to.y, self.rows),
            ),
            EdgeBehavior::Clamp => {
                let (from, to) = (self.normalize(from), self.normalize(to));
                Displacement::new(to.x - from.x, to.y - from.y)
            }
        }
    }

    /// Manhattan distance from `from` to `to` under this grid's edges.
    pub fn distance(&self, from: Point, to: Point) -> u32 {
        self.displacement(from, to).dist
    }

    /// Position after a single unit move, wrapped or clamped.
    pub fn step(&self, p: Point, step: Move) -> Point {
        let (dx, dy) = step.offset_2d();
        self.normalize(p.offset(dx, dy))
    }

    /// Total Manhattan length of a point sequence.
    pub fn path_length(&self, points: &[Point]) -> u64 {
        points
            .windows(2)
            .map(|w| u64::from(self.distance(w[0], w[1])))
            .sum()
    }

    /// Expand a point sequence into the unit moves that walk it, x before y
    /// between each consecutive pair.
    pub fn expand_path(&self, points: &[Point]) -> Vec<Move> {
        let mut moves = Vec::new();
        for w in points.windows(2) {
            moves.extend(self.displacement(w[0], w[1]).moves());
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    // ── delta ───────────────────────────────────────────────────

    #[test]
    fn delta_prefers_short_way_round() {
        assert_eq!(delta(0, 9, 10), -1);
        assert_eq!(delta(9, 0, 10), 1);
        assert_eq!(delta(2, 4, 10), 2);
    }

    #[test]
    fn delta_half_turn_on_even_axis_is_positive() {
        assert_eq!(delta(0, 5, 10), 5);
        assert_eq!(delta(5, 0, 10), 5);
    }

    #[test]
    fn delta_odd_axis_boundary() {
        // 9 / 2 = 4.5: a raw offset of 5 goes the other way.
        assert_eq!(delta(0, 4, 9), 4);
        assert_eq!(delta(0, 5, 9), -4);
    }

    #[test]
    fn delta_degenerate_axes() {
        assert_eq!(delta(0, 0, 1), 0);
        assert_eq!(delta(-7, 12, 1), 0);
        assert_eq!(delta(3, 4, 0), 0);
    }

    #[test]
    fn delta_handles_unnormalized_input() {
        assert_eq!(delta(-1, 0, 10), 1);
        assert_eq!(delta(0, 23, 10), 3);
    }

    // ── GridSpec construction ───────────────────────────────────

    #[test]
    fn new_zero_dims_return_error() {
        assert_eq!(
            GridSpec::new(0, 5, EdgeBehavior::Wrap),
            Err(SpaceError::EmptySpace)
        );
        assert_eq!(
            GridSpec::new(5, 0, EdgeBehavior::Clamp),
            Err(SpaceError::EmptySpace)
        );
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            GridSpec::new(big, 5, EdgeBehavior::Wrap),
            Err(SpaceError::DimensionTooLarge { name: "cols", .. })
        ));
        assert!(matches!(
            GridSpec::new(5, big, EdgeBehavior::Wrap),
            Err(SpaceError::DimensionTooLarge { name: "rows", .. })
        ));
    }

    #[test]
    fn new_rejects_cell_count_over_limit() {
        let side = GridSpec::MAX_DIM;
        assert_eq!(
            GridSpec::new(side, side, EdgeBehavior::Wrap),
            Err(SpaceError::TooManyCells {
                cols: side,
                rows: side,
                max: GridSpec::MAX_CELLS,
            })
        );
        assert!(matches!(
            GridSpec::new(1 << 15, (1 << 13) + 1, EdgeBehavior::Clamp),
            Err(SpaceError::TooManyCells { .. })
        ));
        let edge = GridSpec::new(1 << 15, 1 << 13, EdgeBehavior::Clamp).unwrap();
        assert_eq!(edge.cell_count(), GridSpec::MAX_CELLS);
    }

    // ── Normalization ───────────────────────────────────────────

    #[test]
    fn normalize_wrap() {
        let s = GridSpec::new(10, 6, EdgeBehavior::Wrap).unwrap();
        assert_eq!(s.normalize(p(-1, -1)), p(9, 5));
        assert_eq!(s.normalize(p(10, 6)), p(0, 0));
        assert_eq!(s.normalize(p(-21, 13)), p(9, 1));
    }

    #[test]
    fn normalize_clamp() {
        let s = GridSpec::new(10, 6, EdgeBehavior::Clamp).unwrap();
        assert_eq!(s.normalize(p(-1, -1)), p(0, 0));
        assert_eq!(s.normalize(p(42, 6)), p(9, 5));
        assert_eq!(s.normalize(p(i32::MIN, i32::MAX)), p(0, 5));
    }

    #[test]
    fn index_of_is_row_major() {
        let s = GridSpec::new(4, 3, EdgeBehavior::Wrap).unwrap();
        assert_eq!(s.index_of(p(0, 0)), 0);
        assert_eq!(s.index_of(p(3, 0)), 3);
        assert_eq!(s.index_of(p(0, 1)), 4);
        assert_eq!(s.index_of(p(-1, -1)), 11);
    }

    // ── Displacement ────────────────────────────────────────────

    #[test]
    fn displacement_wrap_vs_clamp() {
        let wrap = GridSpec::new(10, 10, EdgeBehavior::Wrap).unwrap();
        let clamp = GridSpec::new(10, 10, EdgeBehavior::Clamp).unwrap();
        assert_eq!(wrap.displacement(p(1, 1), p(8, 1)), Displacement::new(-3, 0));
        assert_eq!(clamp.displacement(p(1, 1), p(8, 1)), Displacement::new(7, 0));
        assert_eq!(wrap.distance(p(0, 0), p(9, 9)), 2);
        assert_eq!(clamp.distance(p(0, 0), p(9, 9)), 18);
    }

    #[test]
    fn clamp_displacement_clamps_off_grid_points() {
        let clamp = GridSpec::new(10, 10, EdgeBehavior::Clamp).unwrap();
        assert_eq!(clamp.distance(p(i32::MIN, 0), p(5, 0)), 5);
        assert_eq!(
            clamp.displacement(p(i32::MAX, i32::MIN), p(0, i32::MAX)),
            Displacement::new(-9, 9)
        );
    }

    #[test]
    fn moves_go_x_first() {
        let d = Displacement::new(-2, 1);
        let moves: Vec<Move> = d.moves().collect();
        assert_eq!(moves, vec![Move::NegativeX, Move::NegativeX, Move::PositiveY]);
    }

    #[test]
    fn step_wraps_and_clamps() {
        let wrap = GridSpec::new(5, 5, EdgeBehavior::Wrap).unwrap();
        let clamp = GridSpec::new(5, 5, EdgeBehavior::Clamp).unwrap();
        assert_eq!(wrap.step(p(0, 0), Move::NegativeX), p(4, 0));
        assert_eq!(clamp.step(p(0, 0), Move::NegativeX), p(0, 0));
        assert_eq!(wrap.step(p(2, 4), Move::PositiveY), p(2, 0));
    }

    #[test]
    fn expand_path_length_matches_path_length() {
        let s = GridSpec::new(10, 10, EdgeBehavior::Wrap).unwrap();
        let pts = [p(0, 0), p(1, 1), p(8, 1), p(1, 8), p(0, 0)];
        assert_eq!(s.expand_path(&pts).len() as u64, s.path_length(&pts));
        assert_eq!(s.path_length(&pts), 2 + 3 + 6 + 3);
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_wrap() {
        let s = GridSpec::new(7, 6, EdgeBehavior::Wrap).unwrap();
        compliance::run_full_compliance(&s);
    }

    #[test]
    fn compliance_clamp() {
        let s = GridSpec::new(7, 6, EdgeBehavior::Clamp).unwrap();
        compliance::run_full_compliance(&s);
    }

    #[test]
    fn compliance_single_column_torus() {
        let s = GridSpec::new(1, 5, EdgeBehavior::Wrap).unwrap();
        compliance::run_full_compliance(&s);
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_edge() -> impl Strategy<Value = EdgeBehavior> {
        prop_oneof![Just(EdgeBehavior::Clamp), Just(EdgeBehavior::Wrap)]
    }

    proptest! {
        #[test]
        fn delta_is_bounded_and_congruent(
            p1 in -1000i32..1000,
            p2 in -1000i32..1000,
            size in 1u32..200,
        ) {
            let d = delta(p1, p2, size);
            prop_assert!(2 * d.unsigned_abs() <= size);
            let n = i64::from(size);
            prop_assert_eq!(
                (i64::from(d) - (i64::from(p2) - i64::from(p1))).rem_euclid(n),
                0
            );
        }

        #[test]
        fn replaying_moves_reaches_target(
            cols in 1u32..20,
            rows in 1u32..20,
            edge in arb_edge(),
            ax in 0i32..20, ay in 0i32..20,
            bx in 0i32..20, by in 0i32..20,
        ) {
            let s = GridSpec::new(cols, rows, edge).unwrap();
            let a = s.normalize(p(ax, ay));
            let b = s.normalize(p(bx, by));
            let mut pos = a;
            for m in s.displacement(a, b).moves() {
                pos = s.step(pos, m);
            }
            prop_assert_eq!(pos, b);
        }
    }
}

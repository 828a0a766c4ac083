//! The visiting order handed from the tour stages to the compiler.

use crate::error::TourError;
use antgen_core::Point;
use antgen_space::GridSpec;
use indexmap::IndexSet;
use serde::Serialize;

/// An ordered walk from a pinned start to a pinned end.
///
/// Invariants, checked by [`Tour::new`] and preserved by every operation:
/// - at least two points (start and end, which may coincide);
/// - interior points are distinct and never equal either endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tour {
    points: Vec<Point>,
}

impl Tour {
    /// Validate and wrap a full point sequence, endpoints included.
    pub fn new(points: Vec<Point>) -> Result<Self, TourError> {
        if points.len() < 2 {
            return Err(TourError::EmptyInput { len: points.len() });
        }
        let start = points[0];
        let end = points[points.len() - 1];
        let mut seen = IndexSet::with_capacity(points.len());
        for &p in &points[1..points.len() - 1] {
            if p == start || p == end || !seen.insert(p) {
                return Err(TourError::DuplicatePoint(p));
            }
        }
        Ok(Self { points })
    }

    /// Wrap a sequence whose invariants the caller already guarantees.
    pub(crate) fn from_validated(points: Vec<Point>) -> Self {
        debug_assert!(Self::new(points.clone()).is_ok());
        Self { points }
    }

    /// Build from endpoints and an interior order.
    pub fn from_parts(
        start: Point,
        interior: impl IntoIterator<Item = Point>,
        end: Point,
    ) -> Result<Self, TourError> {
        let mut points = vec![start];
        points.extend(interior);
        points.push(end);
        Self::new(points)
    }

    /// First point.
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// Last point.
    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Points strictly between start and end.
    pub fn interior(&self) -> &[Point] {
        &self.points[1..self.points.len() - 1]
    }

    /// Every point, endpoints included.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points, endpoints included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a tour holds at least its two endpoints.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Total Manhattan length under `spec`.
    pub fn cost(&self, spec: &GridSpec) -> u64 {
        spec.path_length(&self.points)
    }

    /// Unwrap into the point sequence.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Reverse the inclusive interior range `i..=k`.
    ///
    /// Callers keep `1 <= i <= k <= len - 2` so the endpoints stay pinned.
    pub(crate) fn reverse_segment(&mut self, i: usize, k: usize) {
        debug_assert!(i >= 1 && k <= self.points.len() - 2 && i <= k);
        self.points[i..=k].reverse();
    }
}

//! Caller-owned grid storage and compilation anchors.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use crate::metric::GridSpec;
use antgen_core::{Heading, Point};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Colored cells that still need a visit, in scan order.
///
/// Scan order is column-major (x outer, y inner). Tour construction
/// breaks distance ties by this order, so it must stay stable.
pub type DirtyPointSet = IndexSet<Point>;

/// Dimensions and edge behavior for a new [`GridContext`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of columns.
    pub cols: u32,
    /// Number of rows.
    pub rows: u32,
    /// Torus or clamped boundary.
    pub edge: EdgeBehavior,
}

impl GridConfig {
    /// Size a grid to cover a `width x height` pixel canvas with square
    /// cells of `scale` pixels, rounding partial cells up.
    ///
    /// A zero `scale` yields a zero-sized config, which
    /// [`GridContext::new`] rejects.
    pub fn from_canvas(width: u32, height: u32, scale: u32, edge: EdgeBehavior) -> Self {
        let (cols, rows) = if scale == 0 {
            (0, 0)
        } else {
            (width.div_ceil(scale), height.div_ceil(scale))
        };
        Self { cols, rows, edge }
    }
}

impl Default for GridConfig {
    /// A 1366x768 canvas at 8 pixels per cell: 171 x 96, wrapping.
    fn default() -> Self {
        Self::from_canvas(1366, 768, 8, EdgeBehavior::Wrap)
    }
}

/// Where the ant must finish, and which way it must face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    /// Final cell.
    pub point: Point,
    /// Final heading.
    pub heading: Heading,
}

/// A grid of color indices plus the start/end anchors of a compilation.
///
/// Owned by the caller and passed into each stage explicitly. The start
/// and end anchors begin unset; compile stages report them as
/// uninitialized unless the caller opts into [`anchor_defaults`].
///
/// [`anchor_defaults`]: GridContext::anchor_defaults
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridContext {
    spec: GridSpec,
    cells: Vec<u32>,
    start: Option<Point>,
    end: Option<Anchor>,
}

impl GridContext {
    /// Create an all-background grid.
    ///
    /// Fails fast on zero or oversized dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use antgen_core::Point;
    /// use antgen_space::{EdgeBehavior, GridConfig, GridContext};
    ///
    /// let mut grid = GridContext::new(GridConfig { cols: 8, rows: 4, edge: EdgeBehavior::Wrap }).unwrap();
    /// grid.set(Point::new(-1, 0), 3);
    /// assert_eq!(grid.get(Point::new(7, 0)), 3);
    /// assert_eq!(grid.dirty_points().len(), 1);
    /// ```
    pub fn new(config: GridConfig) -> Result<Self, SpaceError> {
        let spec = GridSpec::new(config.cols, config.rows, config.edge)?;
        Ok(Self {
            spec,
            cells: vec![0; spec.cell_count()],
            start: None,
            end: None,
        })
    }

    /// The grid's metric.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.spec.cols()
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.spec.rows()
    }

    /// Raw row-major cell storage.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Wrap or clamp a coordinate into the grid.
    pub fn normalize(&self, p: Point) -> Point {
        self.spec.normalize(p)
    }

    /// Color index at `p` (normalized first).
    pub fn get(&self, p: Point) -> u32 {
        self.cells[self.spec.index_of(p)]
    }

    /// Set the color index at `p` (normalized first) and return it.
    pub fn set(&mut self, p: Point, color: u32) -> u32 {
        let idx = self.spec.index_of(p);
        self.cells[idx] = color;
        color
    }

    /// Paint a single cell.
    pub fn color_point(&mut self, x: i32, y: i32, color: u32) {
        self.set(Point::new(x, y), color);
    }

    /// Fill the inclusive rectangle spanned by two corners.
    ///
    /// Corners are normalized first and then ordered, so a rectangle never
    /// straddles the wrap seam.
    pub fn fill_area(&mut self, a: Point, b: Point, color: u32) {
        let a = self.spec.normalize(a);
        let b = self.spec.normalize(b);
        let (x_lo, x_hi) = (a.x.min(b.x), a.x.max(b.x));
        let (y_lo, y_hi) = (a.y.min(b.y), a.y.max(b.y));
        let cols = self.spec.cols() as usize;
        for y in y_lo..=y_hi {
            let row = (y as usize) * cols;
            self.cells[row + x_lo as usize..=row + x_hi as usize].fill(color);
        }
    }

    /// Reset every cell to background.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Collect every cell with a color index above 0.
    pub fn dirty_points(&self) -> DirtyPointSet {
        let mut out = DirtyPointSet::new();
        for x in 0..self.spec.cols() as i32 {
            for y in 0..self.spec.rows() as i32 {
                let p = Point::new(x, y);
                if self.get(p) > 0 {
                    out.insert(p);
                }
            }
        }
        out
    }

    /// Center cell, rounding down.
    pub fn center(&self) -> Point {
        Point::new((self.spec.cols() / 2) as i32, (self.spec.rows() / 2) as i32)
    }

    /// Where the ant starts, if set.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Where the ant ends and which way it faces, if set.
    pub fn end(&self) -> Option<Anchor> {
        self.end
    }

    /// Set the start cell (normalized).
    pub fn set_start(&mut self, p: Point) {
        self.start = Some(self.spec.normalize(p));
    }

    /// Set the end cell (normalized) and final heading.
    pub fn set_end(&mut self, p: Point, heading: Heading) {
        self.end = Some(Anchor {
            point: self.spec.normalize(p),
            heading,
        });
    }

    /// Fill in any unset anchor with the defaults: start and end at the
    /// center cell, facing right. Anchors already set are left alone.
    pub fn anchor_defaults(&mut self) {
        let center = self.center();
        if self.start.is_none() {
            self.start = Some(center);
        }
        if self.end.is_none() {
            self.end = Some(Anchor {
                point: center,
                heading: Heading::Right,
            });
        }
    }
}

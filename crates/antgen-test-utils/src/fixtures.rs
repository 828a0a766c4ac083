//! Deterministic grid and point fixtures.

use antgen_core::{Heading, Point};
use antgen_space::{DirtyPointSet, EdgeBehavior, GridConfig, GridContext};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A reproducible RNG. Same seed, same fixtures.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Up to `count` distinct in-bounds points, in generation order.
///
/// Stops early if the grid has fewer than `count` cells.
pub fn random_points(rng: &mut ChaCha8Rng, cols: u32, rows: u32, count: usize) -> DirtyPointSet {
    let target = count.min((cols as usize) * (rows as usize));
    let mut out = DirtyPointSet::with_capacity(target);
    while out.len() < target {
        let x = rng.gen_range(0..cols as i32);
        let y = rng.gen_range(0..rows as i32);
        out.insert(Point::new(x, y));
    }
    out
}

/// A grid where each cell is dirty with probability `density`, painted
/// with colors `1..=max_color`.
///
/// # Panics
///
/// If `cols` or `rows` is zero, or `max_color` is zero.
pub fn random_dirty_grid(
    rng: &mut ChaCha8Rng,
    cols: u32,
    rows: u32,
    edge: EdgeBehavior,
    density: f64,
    max_color: u32,
) -> GridContext {
    let mut grid = GridContext::new(GridConfig { cols, rows, edge }).expect("valid fixture grid");
    for y in 0..rows as i32 {
        for x in 0..cols as i32 {
            if rng.gen::<f64>() < density {
                let color = rng.gen_range(1..=max_color);
                grid.color_point(x, y, color);
            }
        }
    }
    grid
}

/// 10x10 torus with dirty cells (1,1), (8,1), (1,8) in colors 1, 2, 3,
/// start and end at the origin, finishing to the right.
pub fn scenario_grid() -> GridContext {
    let mut grid = GridContext::new(GridConfig {
        cols: 10,
        rows: 10,
        edge: EdgeBehavior::Wrap,
    })
    .expect("valid fixture grid");
    grid.color_point(1, 1, 1);
    grid.color_point(8, 1, 2);
    grid.color_point(1, 8, 3);
    grid.set_start(Point::new(0, 0));
    grid.set_end(Point::new(0, 0), Heading::Right);
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_points() {
        let a = random_points(&mut seeded_rng(7), 20, 20, 30);
        let b = random_points(&mut seeded_rng(7), 20, 20, 30);
        assert_eq!(a, b);
        assert_eq!(a.len(), 30);
    }

    #[test]
    fn point_count_capped_by_cells() {
        let pts = random_points(&mut seeded_rng(1), 2, 2, 10);
        assert_eq!(pts.len(), 4);
    }

    #[test]
    fn scenario_has_three_dirty_cells() {
        let grid = scenario_grid();
        let dirty: Vec<_> = grid.dirty_points().into_iter().collect();
        assert_eq!(dirty, vec![Point::new(1, 1), Point::new(1, 8), Point::new(8, 1)]);
    }
}

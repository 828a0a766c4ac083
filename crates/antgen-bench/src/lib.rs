//! Benchmark profiles for the antgen program generator.
//!
//! - [`reference_profile`]: the default 171x96 torus with ~1% of cells dirty
//! - [`stress_profile`]: the same torus with ~5% of cells dirty
//! - [`scatter_points`]: deterministic dirty-cell placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use antgen::PipelineConfig;
use antgen_core::{Heading, Point};
use antgen_space::{GridConfig, GridContext, SpaceError};

/// Reference grid: default dimensions, 160 dirty cells, anchors at the
/// center facing right.
pub fn reference_profile(seed: u64) -> Result<GridContext, SpaceError> {
    profile(GridConfig::default(), 160, seed)
}

/// Stress grid: default dimensions, 820 dirty cells.
pub fn stress_profile(seed: u64) -> Result<GridContext, SpaceError> {
    profile(GridConfig::default(), 820, seed)
}

/// Pipeline settings used by the profile benches.
pub fn bench_config() -> PipelineConfig {
    PipelineConfig::default()
}

fn profile(config: GridConfig, dirty: usize, seed: u64) -> Result<GridContext, SpaceError> {
    let mut grid = GridContext::new(config)?;
    let cells = (config.cols as usize) * (config.rows as usize);
    for (i, idx) in scatter_points(cells, dirty, seed).into_iter().enumerate() {
        let x = (idx % config.cols as usize) as i32;
        let y = (idx / config.cols as usize) as i32;
        grid.color_point(x, y, 1 + (i % 11) as u32);
    }
    grid.set_start(grid.center());
    grid.set_end(Point::new(0, 0), Heading::Right);
    Ok(grid)
}

/// `n` distinct flat cell indices below `cell_count`, spread by a simple
/// hash of the seed. Returns fewer if the grid is smaller than `n`.
pub fn scatter_points(cell_count: usize, n: usize, seed: u64) -> Vec<usize> {
    let n = n.min(cell_count);
    let mut out = Vec::with_capacity(n);
    let mut occupied = std::collections::HashSet::new();

    for i in 0..n {
        let mut pos = (seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add((i as u64).wrapping_mul(1442695040888963407))
            % cell_count as u64) as usize;

        // Step past occupied cells.
        while occupied.contains(&pos) {
            pos = (pos + 1) % cell_count;
        }
        occupied.insert(pos);
        out.push(pos);
    }

    out
}

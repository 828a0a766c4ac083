//! The end-to-end grid to rule program pipeline.

use crate::config::PipelineConfig;
use antgen_compile::{CompileError, CompiledProgram, ProgramCompiler};
use antgen_core::Palette;
use antgen_space::{GridContext, PixelLayout};
use antgen_tour::{solve, TimingEstimate, TourReport};
use tracing::{debug, info};

/// Everything one pipeline run produced.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    /// Runtime predicted before solving.
    pub estimate: TimingEstimate,
    /// The tour and what it took to build.
    pub report: TourReport,
    /// The compiled rules.
    pub compiled: CompiledProgram,
}

/// Scan `grid`, solve the tour, and compile it.
///
/// Both anchors must be set unless `config.lazy_anchor` is on, in which
/// case missing anchors are filled in on `grid` first. A grid with no
/// dirty cells yields an epilogue-only program.
pub fn compile_grid(
    grid: &mut GridContext,
    config: &PipelineConfig,
) -> Result<PipelineOutput, CompileError> {
    if config.lazy_anchor {
        grid.anchor_defaults();
    }
    let start = grid
        .start()
        .ok_or(CompileError::UninitializedState { anchor: "start" })?;
    let end = grid
        .end()
        .ok_or(CompileError::UninitializedState { anchor: "end" })?;

    let dirty = grid.dirty_points();
    let estimate = config.timing.estimate(dirty.len());
    debug!(
        dirty = dirty.len(),
        estimated_ms = estimate.estimated_ms,
        complexity = ?estimate.complexity,
        "scanned grid"
    );

    let report = solve(dirty, start, end.point, grid.spec(), config.strategy);
    let compiled = ProgramCompiler::new(grid, config.compile_options()).compile(&report.tour)?;

    info!(
        points = report.num_points,
        greedy_cost = report.greedy_cost,
        optimized_cost = report.stats.cost_after,
        rules = compiled.program.rule_count(),
        elapsed_ms = report.total_time().as_secs_f64() * 1000.0,
        "compiled grid"
    );

    Ok(PipelineOutput {
        estimate,
        report,
        compiled,
    })
}

/// Build a grid from [`PipelineConfig::grid_config`] and paint `pixels` onto it.
///
/// The returned grid has no anchors; set them or enable
/// `lazy_anchor` before calling [`compile_grid`].
pub fn grid_from_image(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    palette: &Palette,
    config: &PipelineConfig,
) -> Result<GridContext, CompileError> {
    let mut grid = GridContext::new(config.grid_config())?;
    grid.paint_image(pixels, width, height, layout, palette)?;
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use antgen_core::{ErrorKind, Heading, Point};
    use antgen_space::{EdgeBehavior, GridConfig};

    fn small_grid() -> GridContext {
        GridContext::new(GridConfig {
            cols: 8,
            rows: 8,
            edge: EdgeBehavior::Wrap,
        })
        .unwrap()
    }

    #[test]
    fn unset_anchors_are_uninitialized() {
        let mut grid = small_grid();
        let err = compile_grid(&mut grid, &PipelineConfig::default()).unwrap_err();
        assert_eq!(err, CompileError::UninitializedState { anchor: "start" });

        grid.set_start(Point::new(0, 0));
        let err = compile_grid(&mut grid, &PipelineConfig::default()).unwrap_err();
        assert_eq!(err, CompileError::UninitializedState { anchor: "end" });
        assert_eq!(err.kind(), ErrorKind::UninitializedState);
    }

    #[test]
    fn lazy_anchor_uses_center_facing_right() {
        let mut grid = small_grid();
        grid.color_point(1, 1, 3);
        let cfg = PipelineConfig {
            lazy_anchor: true,
            ..PipelineConfig::default()
        };
        let out = compile_grid(&mut grid, &cfg).unwrap();
        assert_eq!(grid.start(), Some(Point::new(4, 4)));
        assert_eq!(grid.end().unwrap().heading, Heading::Right);
        assert_eq!(out.report.tour.start(), Point::new(4, 4));
        assert_eq!(out.compiled.summary.heading, Heading::Right);
    }

    #[test]
    fn empty_grid_is_epilogue_only() {
        let mut grid = small_grid();
        grid.set_start(Point::new(2, 2));
        grid.set_end(Point::new(2, 2), Heading::Left);
        let out = compile_grid(&mut grid, &PipelineConfig::default()).unwrap();
        assert_eq!(out.compiled.program.len(), 2);
        assert_eq!(out.report.num_points, 0);
        assert_eq!(out.estimate.estimated_ms, 0.0);
    }

    #[test]
    fn image_grid_follows_config_size() {
        let cfg = PipelineConfig {
            grid: GridConfig {
                cols: 2,
                rows: 1,
                edge: EdgeBehavior::Clamp,
            },
            ..PipelineConfig::default()
        };
        // Two RGB pixels: white then black.
        let pixels = [255, 255, 255, 0, 0, 0];
        let grid =
            grid_from_image(&pixels, 2, 1, PixelLayout::Rgb, &Palette::default(), &cfg).unwrap();
        assert_eq!(grid.cells(), &[1, 0]);
    }

    #[test]
    fn image_size_mismatch_is_space_error() {
        let err = grid_from_image(
            &[0, 0, 0],
            2,
            1,
            PixelLayout::Rgb,
            &Palette::default(),
            &PipelineConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CompileError::Space(_)));
    }
}

//! antgen: turmite rule programs that redraw a colored grid.
//!
//! This is the top-level facade crate. It re-exports the sub-crates and
//! adds the end-to-end [`compile_grid`] pipeline, the TOML
//! [`PipelineConfig`], JSON output, and [`logging::init`].
//!
//! # Quick start
//!
//! ```rust
//! use antgen::prelude::*;
//!
//! let mut grid = GridContext::new(GridConfig {
//!     cols: 10,
//!     rows: 10,
//!     edge: EdgeBehavior::Wrap,
//! })
//! .unwrap();
//! grid.color_point(1, 1, 1);
//! grid.color_point(8, 1, 2);
//! grid.color_point(1, 8, 3);
//! grid.set_start(Point::new(0, 0));
//! grid.set_end(Point::new(0, 0), Heading::Right);
//!
//! let out = compile_grid(&mut grid, &PipelineConfig::default()).unwrap();
//! assert_eq!(out.compiled.summary.epilogue_rules, 2);
//! assert_eq!(
//!     out.compiled.summary.path_rules as u64,
//!     out.report.tour.cost(grid.spec())
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `antgen-core` | Points, moves, headings, rules, palette |
//! | [`space`] | `antgen-space` | Grid metric, grid storage, rasterization |
//! | [`tour`] | `antgen-tour` | Greedy tours, 2-opt, runtime estimation |
//! | [`compile`] | `antgen-compile` | Rule program compiler |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod logging;
pub mod output;
pub mod pipeline;

pub use config::{load_config, save_config, ConfigError, PipelineConfig};
pub use output::{parse_program, program_json, program_json_pretty};
pub use pipeline::{compile_grid, grid_from_image, PipelineOutput};

/// Core vocabulary types (`antgen-core`).
pub use antgen_core as types;

/// Grid metric and storage (`antgen-space`).
///
/// [`space::GridSpec`] is the distance model; [`space::GridContext`]
/// holds the colors and anchors.
pub use antgen_space as space;

/// Tour construction, 2-opt, and runtime estimation (`antgen-tour`).
pub use antgen_tour as tour;

/// Rule program compilation (`antgen-compile`).
pub use antgen_compile as compile;

/// Common imports for typical antgen usage.
///
/// ```rust
/// use antgen::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use antgen_core::{ErrorKind, Heading, Move, NextState, Palette, Point, Rule, RuleProgram};

    // Space
    pub use antgen_space::{EdgeBehavior, GridConfig, GridContext, GridSpec, PixelLayout};

    // Tour
    pub use antgen_tour::{TimingConstants, Tour, TwoOptStrategy};

    // Compile
    pub use antgen_compile::{CompileError, CompileOptions, ProgramCompiler};

    // Pipeline
    pub use crate::{compile_grid, PipelineConfig, PipelineOutput};
}

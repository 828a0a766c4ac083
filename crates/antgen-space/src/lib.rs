//! Grid geometry and storage for antgen.
//!
//! This crate owns everything spatial: the [`GridSpec`] displacement and
//! distance model (toroidal or clamped, selected by [`EdgeBehavior`]),
//! per-axis move expansion, and the caller-owned [`GridContext`] that
//! stores color indices and the start/end anchors of a compilation.
//!
//! # Metric
//!
//! All distances are Manhattan (L1) because the ant only takes
//! axis-aligned unit steps. On a torus each axis independently takes the
//! shorter way round; see [`delta`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod grid;
pub mod metric;
pub mod raster;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use grid::{Anchor, DirtyPointSet, GridConfig, GridContext};
pub use metric::{delta, Displacement, GridSpec};
pub use raster::PixelLayout;

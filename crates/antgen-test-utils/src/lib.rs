//! Test utilities for antgen development.
//!
//! Seeded generators for dirty grids and point sets, the fixed 10x10
//! torus scenario used across crates, and a [`replay`] interpreter that
//! executes a [`RuleProgram`](antgen_core::RuleProgram) the way the
//! external turmite simulator would.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod replay;

pub use fixtures::{random_dirty_grid, random_points, scenario_grid, seeded_rng};
pub use replay::{replay, Replay, Write};

//! Rule program compilation for antgen.
//!
//! [`ProgramCompiler`] walks a [`Tour`](antgen_tour::Tour) over a
//! [`GridContext`](antgen_space::GridContext) and emits one single-rule
//! state per unit move, then appends the alignment [`epilogue`] for the
//! requested final heading.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compiler;
pub mod epilogue;
pub mod error;

pub use compiler::{CompileOptions, CompileSummary, CompiledProgram, ProgramCompiler};
pub use epilogue::{alignment, AlignmentStep};
pub use error::CompileError;

//! Core types for antgen turmite program generation.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: grid
//! [`Point`]s, the closed [`Move`] and [`Heading`] enumerations, turmite
//! [`Rule`]s and the [`RuleProgram`] they are collected into, the shared
//! [`ErrorKind`] classification, and the default color [`Palette`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod palette;
pub mod point;
pub mod rule;

pub use direction::{Heading, Move};
pub use error::{CoreError, ErrorKind};
pub use palette::{Palette, Rgb};
pub use point::Point;
pub use rule::{NextState, Rule, RuleList, RuleProgram, StateId};

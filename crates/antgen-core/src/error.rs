//! Error types shared across the antgen workspace.
//!
//! Every crate defines its own error enum, but they all classify into the
//! same small set of [`ErrorKind`]s so callers can react uniformly.

use thiserror::Error;

/// Coarse classification of every antgen error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A caller-supplied value is malformed or out of range
    /// (unknown heading, zero grid dimension, unrepresentable coordinate).
    InvalidArgument,
    /// An operation needs state that has not been set up yet
    /// (for example, compiling before an end anchor exists).
    UninitializedState,
    /// There is nothing to work on. Recoverable: the pipeline emits an
    /// epilogue-only program instead of failing.
    EmptyInput,
}

/// Errors from parsing the core vocabulary types.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Heading name was not one of `right`, `left`, `up`, `down`.
    #[error("unknown heading '{0}', expected one of right, left, up, down")]
    UnknownHeading(String),
    /// Move token was not one of `>`, `<`, `v`, `^`.
    #[error("unknown move token '{0}', expected one of >, <, v, ^")]
    UnknownMove(String),
    /// Hex color string could not be parsed.
    #[error("invalid hex color '{0}'")]
    InvalidHexColor(String),
}

impl CoreError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

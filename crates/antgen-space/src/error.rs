//! Error types for grid construction and grid I/O.

use antgen_core::ErrorKind;
use thiserror::Error;

/// Errors arising from grid construction, mutation, or rasterization.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero cells.
    #[error("grid must have at least one cell")]
    EmptySpace,
    /// A dimension does not fit the `i32` coordinate type.
    #[error("{name} = {value} exceeds maximum {max}")]
    DimensionTooLarge {
        /// Which dimension (`"cols"` or `"rows"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
    /// `cols * rows` exceeds the cell limit.
    #[error("{cols}x{rows} grid exceeds {max} cells")]
    TooManyCells {
        /// Requested columns.
        cols: u32,
        /// Requested rows.
        rows: u32,
        /// Largest accepted cell count.
        max: usize,
    },
    /// Pixel buffer length does not match `width * height * channels`.
    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    ImageSizeMismatch {
        /// Bytes required by the declared dimensions and layout.
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },
    /// Image width or height is zero.
    #[error("image must be at least 1x1, got {width}x{height}")]
    EmptyImage {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
    },
}

impl SpaceError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

//! Error taxonomy for field generation.

use thiserror::Error;

/// Errors surfaced by the 2D field generators.
///
/// Degenerate-but-answerable inputs (zero-area Perlin fields, constant
/// fields hitting normalization) are not errors; they produce empty or
/// all-zero results instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    /// A non-degenerate grid was required but a zero extent was given.
    #[error("field dimensions must be non-zero, got {width}x{height}")]
    InvalidDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// A caller-supplied noise table had no entries to look up.
    #[error("noise table must contain at least one entry")]
    EmptyTable,
}

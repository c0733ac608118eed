//! Error type shared by every kernel.

use crate::lane::LaneKind;

/// Errors a kernel call can fail with.
///
/// Every error terminates the call. No partial output is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KernelError {
    /// Elementwise operands have different lengths.
    #[error("vector lengths must be the same (left has {left} elements, right has {right})")]
    LengthMismatch { left: usize, right: usize },

    /// Two's-complement overflow detected on an integer lane.
    #[error("{kind} overflow in {operation}")]
    Overflow {
        kind: LaneKind,
        operation: &'static str,
    },

    /// Matrix operands have incompatible dimensions.
    #[error(
        "invalid matrix dimensions: left is {left_rows}x{left_cols}, right is {right_rows}x{right_cols}"
    )]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// `rows * cols` does not match the number of elements supplied.
    #[error("matrix shape {rows}x{cols} does not match {len} elements")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },

    /// A matrix was constructed with a zero dimension.
    #[error("matrix dimensions must be greater than zero (got {rows}x{cols})")]
    EmptyShape { rows: usize, cols: usize },

    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Runtime-dispatched operands carry different lane kinds.
    #[error("lane kind mismatch: {left} and {right}")]
    KindMismatch { left: LaneKind, right: LaneKind },
}

/// Result alias for kernel calls.
pub type Result<T> = std::result::Result<T, KernelError>;

//! Matrix engine error types.

use thiserror::Error;

/// Result type for matrix operations.
pub type MathResult<T> = Result<T, MathError>;

/// Validation failures reported by [`MatrixEngine::multiply`](crate::MatrixEngine::multiply).
///
/// Both variants leave the destination zero-filled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// One of the operand dimensions exceeds the supported maximum.
    #[error("size of a matrix is too big, max size is: {max} (got {rows}x{cols})")]
    TooLarge {
        /// Supported maximum for any dimension.
        max: usize,
        /// Rows of the offending operand.
        rows: usize,
        /// Columns of the offending operand.
        cols: usize,
    },

    /// The shared inner dimension does not agree.
    #[error(
        "number of destination matrix columns should be the same as a number of source matrix rows: columns={columns}, rows={rows}"
    )]
    DimensionMismatch {
        /// Columns of the destination (left) operand.
        columns: usize,
        /// Rows of the source (right) operand.
        rows: usize,
    },
}

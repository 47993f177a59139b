//! Error types for palette loading and color search.
//!
//! A palette that fails to parse and a palette that holds no entries are
//! reported separately here, but callers that only care about "usable or
//! not" can treat both [`ColorError::Malformed`] and
//! [`ColorError::EmptyPalette`] as the same failure.

use rgb2pal_math::MathError;
use thiserror::Error;

/// Color operation error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// I/O error while reading a palette.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Text is not a hexadecimal RGB value.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// A non-comment palette line does not match `<index>=<hex>`.
    #[error("malformed palette line {line}: {content:?}")]
    Malformed {
        /// 1-based line number in the palette source.
        line: usize,
        /// Offending line, without the line terminator.
        content: String,
    },

    /// The palette holds no entries.
    #[error("palette is empty")]
    EmptyPalette,

    /// Matrix engine rejected the operands.
    #[error("matrix error: {0}")]
    Matrix(#[from] MathError),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;

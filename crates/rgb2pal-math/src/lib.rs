//! # rgb2pal-math
//!
//! Matrix primitives for rgb2pal color transforms.
//!
//! - [`Matrix`] - dense row-major `f64` matrix of any shape
//! - [`MatrixEngine`] - bounded multiplier owning its own scratch storage
//!
//! # Design
//!
//! Multiplication is done in place: the destination holds the left operand
//! on entry and the product on exit.
//!
//! ```text
//! dest (R x K) * src (K x C)  ->  dest (R x C)
//! ```
//!
//! Every dimension is limited to [`MAX_MATRIX_SIZE`]. Operands that break the
//! size limit or disagree on the inner dimension never panic: the destination
//! is zero-filled, a diagnostic is logged, and the error is returned.
//!
//! # Usage
//!
//! ```rust
//! use rgb2pal_math::{Matrix, MatrixEngine};
//!
//! let mut engine = MatrixEngine::new();
//! let mut m = Matrix::from_rows([
//!     [2.0, 0.0, 0.0],
//!     [0.0, 3.0, 0.0],
//!     [0.0, 0.0, 4.0],
//! ]);
//! let v = Matrix::column(&[1.0, 1.0, 1.0]);
//!
//! engine.multiply(&mut m, &v).unwrap();
//! assert_eq!(m.shape(), (3, 1));
//! assert_eq!(m.as_slice(), &[2.0, 3.0, 4.0]);
//! ```
//!
//! # Used By
//!
//! - `rgb2pal-color` - RGB to YUV conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod matrix;

pub use error::{MathError, MathResult};
pub use matrix::*;

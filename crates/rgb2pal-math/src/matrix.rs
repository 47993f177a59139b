//! Dense matrices and the bounded in-place multiplier.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order. A color triplet is a 3x1
//! **column** matrix, so a linear color transform reads:
//!
//! ```text
//! | m00 m01 m02 |   | r |   | m00*r + m01*g + m02*b |
//! | m10 m11 m12 | * | g | = | m10*r + m11*g + m12*b |
//! | m20 m21 m22 |   | b |   | m20*r + m21*g + m22*b |
//! ```
//!
//! # Scratch storage
//!
//! [`MatrixEngine`] copies both operands into its own fixed-capacity scratch
//! buffers before accumulating into the destination. Scratch is owned by the
//! engine, so concurrent callers each need their own engine.

use crate::{MathError, MathResult};
use std::fmt;
use std::ops::{Index, IndexMut};
use tracing::warn;

/// Largest supported value for any matrix dimension.
pub const MAX_MATRIX_SIZE: usize = 100;

const SCRATCH_LEN: usize = MAX_MATRIX_SIZE * MAX_MATRIX_SIZE;

/// A dense `rows x cols` matrix of `f64`.
///
/// # Example
///
/// ```rust
/// use rgb2pal_math::Matrix;
///
/// let m = Matrix::from_rows([
///     [1.0, 2.0],
///     [3.0, 4.0],
/// ]);
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m[(1, 0)], 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates a matrix from row arrays.
    pub fn from_rows<const R: usize, const C: usize>(rows: [[f64; C]; R]) -> Self {
        Self {
            rows: R,
            cols: C,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// Creates an `n x 1` column matrix.
    ///
    /// ```rust
    /// use rgb2pal_math::Matrix;
    ///
    /// let rgb = Matrix::column(&[255.0, 128.0, 0.0]);
    /// assert_eq!(rgb.shape(), (3, 1));
    /// ```
    pub fn column(values: &[f64]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major element slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns true if every element is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0.0)
    }

    fn fill_zero(&mut self) {
        self.data.fill(0.0);
    }

    fn check_size(&self) -> MathResult<()> {
        if self.rows > MAX_MATRIX_SIZE || self.cols > MAX_MATRIX_SIZE {
            return Err(MathError::TooLarge {
                max: MAX_MATRIX_SIZE,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < self.rows && col < self.cols, "matrix index out of range");
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(row < self.rows && col < self.cols, "matrix index out of range");
        &mut self.data[row * self.cols + col]
    }
}

/// Bounded matrix multiplier with private scratch storage.
///
/// Both scratch buffers are allocated once, at construction, with room for
/// a [`MAX_MATRIX_SIZE`] square operand. Every call overwrites them.
pub struct MatrixEngine {
    left: Vec<f64>,
    right: Vec<f64>,
}

impl MatrixEngine {
    /// Creates an engine with zeroed scratch buffers.
    pub fn new() -> Self {
        Self {
            left: vec![0.0; SCRATCH_LEN],
            right: vec![0.0; SCRATCH_LEN],
        }
    }

    /// Multiplies `dest` by `src` in place.
    ///
    /// On entry `dest` is the left operand (`R x K`); on success it holds the
    /// product (`R x C` where `src` is `K x C`).
    ///
    /// # Errors
    ///
    /// - [`MathError::TooLarge`] if any dimension exceeds [`MAX_MATRIX_SIZE`]
    /// - [`MathError::DimensionMismatch`] if the columns of `dest` differ from the rows of `src`
    ///
    /// In both cases `dest` keeps its shape and is filled with zeros.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rgb2pal_math::{Matrix, MatrixEngine};
    ///
    /// let mut engine = MatrixEngine::new();
    /// let mut a = Matrix::zeros(2, 3);
    /// let b = Matrix::zeros(2, 2);
    /// assert!(engine.multiply(&mut a, &b).is_err());
    /// assert!(a.is_zero());
    /// ```
    pub fn multiply(&mut self, dest: &mut Matrix, src: &Matrix) -> MathResult<()> {
        if let Err(err) = validate(dest, src) {
            warn!("{err}");
            dest.fill_zero();
            return Err(err);
        }

        let rows = dest.rows;
        let inner = dest.cols;
        let cols = src.cols;

        for i in 0..rows {
            for k in 0..inner {
                self.left[i * MAX_MATRIX_SIZE + k] = dest.data[i * inner + k];
            }
        }
        for k in 0..inner {
            for j in 0..cols {
                self.right[k * MAX_MATRIX_SIZE + j] = src.data[k * cols + j];
            }
        }

        dest.data.clear();
        dest.data.resize(rows * cols, 0.0);
        dest.cols = cols;

        for i in 0..rows {
            for j in 0..cols {
                let out = &mut dest.data[i * cols + j];
                for k in 0..inner {
                    *out += self.left[i * MAX_MATRIX_SIZE + k] * self.right[k * MAX_MATRIX_SIZE + j];
                }
            }
        }

        Ok(())
    }
}

impl Default for MatrixEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MatrixEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixEngine")
            .field("capacity", &(MAX_MATRIX_SIZE, MAX_MATRIX_SIZE))
            .finish()
    }
}

fn validate(dest: &Matrix, src: &Matrix) -> MathResult<()> {
    dest.check_size()?;
    src.check_size()?;
    if dest.cols != src.rows {
        return Err(MathError::DimensionMismatch {
            columns: dest.cols,
            rows: src.rows,
        });
    }
    Ok(())
}

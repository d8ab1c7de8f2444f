use std::error::Error;
use std::fmt;

/// Errors raised by [`Matrix`](crate::math::Matrix) operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Construction or resize asked for a zero dimension, or for a shape
    /// whose element count does not fit in `usize`.
    InvalidDimension { rows: usize, cols: usize },
    /// Element access outside `[0, rows) x [0, cols)`.
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// The operation needs allocated storage but got a 0x0 matrix.
    EmptyMatrix,
    /// Operand shapes are incompatible for `op`. `other` is `None` when the
    /// operation requires a square matrix.
    ShapeMismatch {
        op: &'static str,
        shape: (usize, usize),
        other: Option<(usize, usize)>,
    },
    SingularMatrix { determinant: f64 },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::InvalidDimension { rows, cols } => {
                if *rows < 1 || *cols < 1 {
                    write!(
                        f,
                        "invalid dimensions {}x{}: rows and columns must be at least 1",
                        rows, cols
                    )
                } else {
                    write!(
                        f,
                        "invalid dimensions {}x{}: element count overflows usize",
                        rows, cols
                    )
                }
            }
            MatrixError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "index ({}, {}) out of range for {}x{} matrix",
                row, col, rows, cols
            ),
            MatrixError::EmptyMatrix => write!(f, "operation requires a non-empty matrix"),
            MatrixError::ShapeMismatch {
                op,
                shape,
                other: Some(other),
            } => write!(
                f,
                "{}: incompatible shapes {}x{} and {}x{}",
                op, shape.0, shape.1, other.0, other.1
            ),
            MatrixError::ShapeMismatch {
                op,
                shape,
                other: None,
            } => write!(
                f,
                "{}: requires a square matrix, got {}x{}",
                op, shape.0, shape.1
            ),
            MatrixError::SingularMatrix { determinant } => write!(
                f,
                "matrix is singular (determinant {:e})",
                determinant
            ),
        }
    }
}

impl Error for MatrixError {}

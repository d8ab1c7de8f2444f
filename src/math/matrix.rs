use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;

/// Dense row-major matrix of `f64`.
///
/// Storage is allocated if and only if both dimensions are at least 1. The
/// default value is the empty 0x0 matrix, which owns no storage.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let len = check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; len],
        })
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self, MatrixError> {
        let (rows, cols) = shape;
        let len = check_dimensions(rows, cols)?;
        if data.len() != len {
            return Err(MatrixError::ShapeMismatch {
                op: "from_shape_vec",
                shape,
                other: Some((1, data.len())),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a matrix from equal-length rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        let len = check_dimensions(nrows, ncols)?;

        let mut data = Vec::with_capacity(len);
        for row in rows {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(MatrixError::ShapeMismatch {
                    op: "from_rows",
                    shape: (nrows, ncols),
                    other: Some((1, row.len())),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: nrows,
            cols: ncols,
            data,
        })
    }

    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        Ok(m)
    }

    /// Moves the storage out of `source`, leaving it empty.
    pub fn take(source: &mut Matrix) -> Matrix {
        std::mem::take(source)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Raw row-major storage. Empty for a 0x0 matrix.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_index(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.offset(row, col))
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&f64, MatrixError> {
        let offset = self.check_index(row, col)?;
        Ok(&self.data[offset])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f64, MatrixError> {
        let offset = self.check_index(row, col)?;
        Ok(&mut self.data[offset])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, f64> {
        self.data.iter_mut()
    }

    /// Changes the row count, keeping the overlapping rows and zero-filling
    /// any new ones.
    pub fn set_rows(&mut self, rows: usize) -> Result<(), MatrixError> {
        self.reshape(rows, self.cols)
    }

    /// Changes the column count, keeping the overlapping columns and
    /// zero-filling any new ones.
    pub fn set_cols(&mut self, cols: usize) -> Result<(), MatrixError> {
        self.reshape(self.rows, cols)
    }

    fn reshape(&mut self, rows: usize, cols: usize) -> Result<(), MatrixError> {
        let mut resized = Matrix::new(rows, cols)?;
        let keep_rows = rows.min(self.rows);
        let keep_cols = cols.min(self.cols);
        for row in 0..keep_rows {
            for col in 0..keep_cols {
                resized[(row, col)] = self[(row, col)];
            }
        }
        log::trace!(
            "reallocating {}x{} matrix as {}x{}",
            self.rows,
            self.cols,
            rows,
            cols
        );
        *self = resized;
        Ok(())
    }
}

/// Validates a shape and returns its element count.
fn check_dimensions(rows: usize, cols: usize) -> Result<usize, MatrixError> {
    if rows < 1 || cols < 1 {
        return Err(MatrixError::InvalidDimension { rows, cols });
    }
    rows.checked_mul(cols).ok_or(MatrixError::InvalidDimension { rows, cols })
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        match self.check_index(index.0, index.1) {
            Ok(offset) => &self.data[offset],
            Err(err) => panic!("{}", err),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        match self.check_index(index.0, index.1) {
            Ok(offset) => &mut self.data[offset],
            Err(err) => panic!("{}", err),
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// Unvalidated serialized form of a [`Matrix`].
#[derive(Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        if raw.rows == 0 && raw.cols == 0 && raw.data.is_empty() {
            return Ok(Matrix::default());
        }
        Matrix::from_shape_vec((raw.rows, raw.cols), raw.data)
    }
}

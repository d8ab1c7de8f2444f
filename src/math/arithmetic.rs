//! Element-wise and product arithmetic on [`Matrix`].
//!
//! The additive operations and scalar multiplication mutate the receiver in
//! place. Matrix multiplication comes in two forms: [`Matrix::product`]
//! returns a fresh matrix, [`Matrix::mul_matrix`] replaces the receiver with
//! that product.

use crate::config::Tolerance;
use crate::error::MatrixError;
use crate::math::Matrix;

impl Matrix {
    /// Compares two matrices element by element after rounding each value
    /// to 7 decimal digits.
    ///
    /// Matrices of different shapes are simply unequal. Comparing two empty
    /// matrices is an error rather than a trivial `true`.
    pub fn eq_matrix(&self, other: &Matrix) -> Result<bool, MatrixError> {
        self.eq_matrix_with(other, &Tolerance::default())
    }

    /// [`eq_matrix`](Self::eq_matrix) with an explicit number of digits.
    pub fn eq_matrix_with(
        &self,
        other: &Matrix,
        tolerance: &Tolerance,
    ) -> Result<bool, MatrixError> {
        if self.is_empty() && other.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        if self.shape() != other.shape() {
            return Ok(false);
        }
        Ok(self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| tolerance.quantize(*a) == tolerance.quantize(*b)))
    }

    pub fn sum_matrix(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        self.check_same_shape("sum_matrix", other)?;
        for (a, b) in self.iter_mut().zip(other.as_slice()) {
            *a += *b;
        }
        Ok(())
    }

    pub fn sub_matrix(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        self.check_same_shape("sub_matrix", other)?;
        for (a, b) in self.iter_mut().zip(other.as_slice()) {
            *a -= *b;
        }
        Ok(())
    }

    /// Multiplies every element by `num`.
    pub fn mul_number(&mut self, num: f64) -> Result<(), MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        for value in self.iter_mut() {
            *value *= num;
        }
        Ok(())
    }

    /// Returns `self * other` as a new `(self.rows, other.cols)` matrix.
    pub fn product(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.is_empty() && other.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        if self.cols() != other.rows() {
            return Err(MatrixError::ShapeMismatch {
                op: "mul_matrix",
                shape: self.shape(),
                other: Some(other.shape()),
            });
        }

        let mut result = Matrix::new(self.rows(), other.cols())?;
        for i in 0..self.rows() {
            for j in 0..other.cols() {
                let mut acc = 0.0;
                for k in 0..self.cols() {
                    acc += self[(i, k)] * other[(k, j)];
                }
                result[(i, j)] = acc;
            }
        }
        Ok(result)
    }

    /// Replaces `self` with `self * other`.
    pub fn mul_matrix(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        let result = self.product(other)?;
        log::trace!(
            "replacing {}x{} matrix with {}x{} product",
            self.rows(),
            self.cols(),
            result.rows(),
            result.cols()
        );
        *self = result;
        Ok(())
    }

    fn check_same_shape(&self, op: &'static str, other: &Matrix) -> Result<(), MatrixError> {
        if self.is_empty() && other.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch {
                op,
                shape: self.shape(),
                other: Some(other.shape()),
            });
        }
        Ok(())
    }
}

use crate::config::Tolerance;
use crate::error::MatrixError;
use crate::math::Matrix;

impl Matrix {
    pub fn transpose(&self) -> Result<Matrix, MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        let mut result = Matrix::new(self.cols(), self.rows())?;
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                result[(j, i)] = self[(i, j)];
            }
        }
        Ok(result)
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// Runs in O(n!) time, so it is only meant for small matrices.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        self.check_square("determinant")?;
        self.expand_determinant()
    }

    /// Matrix of signed minor determinants: `result[i][j]` is
    /// `(-1)^(i+j)` times the determinant of the minor without row `i` and
    /// column `j`.
    pub fn calc_complements(&self) -> Result<Matrix, MatrixError> {
        self.check_square("calc_complements")?;
        let n = self.rows();
        let mut result = Matrix::new(n, n)?;
        if n == 1 {
            // the minor of a 1x1 matrix is empty, whose determinant is 1
            result[(0, 0)] = 1.0;
            return Ok(result);
        }
        for i in 0..n {
            for j in 0..n {
                let minor_det = self.minor(i, j)?.expand_determinant()?;
                result[(i, j)] = if (i + j) % 2 == 0 {
                    minor_det
                } else {
                    -minor_det
                };
            }
        }
        Ok(result)
    }

    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        self.inverse_with(&Tolerance::default())
    }

    /// Inverse through the adjugate: the transposed cofactor matrix scaled
    /// by `1 / determinant`.
    pub fn inverse_with(&self, tolerance: &Tolerance) -> Result<Matrix, MatrixError> {
        self.check_square("inverse")?;
        let determinant = self.expand_determinant()?;
        if tolerance.is_singular(determinant) {
            log::debug!(
                "refusing to invert {}x{} matrix with determinant {:e}",
                self.rows(),
                self.cols(),
                determinant
            );
            return Err(MatrixError::SingularMatrix { determinant });
        }
        log::debug!(
            "inverting {}x{} matrix, determinant = {}",
            self.rows(),
            self.cols(),
            determinant
        );

        if self.rows() == 1 {
            return Matrix::from_shape_vec((1, 1), vec![1.0 / determinant]);
        }
        let mut result = self.calc_complements()?.transpose()?;
        result.mul_number(1.0 / determinant)?;
        Ok(result)
    }

    /// Copy of `self` without row `row` and column `col`.
    fn minor(&self, row: usize, col: usize) -> Result<Matrix, MatrixError> {
        let mut result = Matrix::new(self.rows() - 1, self.cols() - 1)?;
        let mut m_row = 0;
        for i in (0..self.rows()).filter(|&i| i != row) {
            let mut m_col = 0;
            for j in (0..self.cols()).filter(|&j| j != col) {
                result[(m_row, m_col)] = self[(i, j)];
                m_col += 1;
            }
            m_row += 1;
        }
        Ok(result)
    }

    fn expand_determinant(&self) -> Result<f64, MatrixError> {
        if self.rows() == 1 {
            return Ok(self[(0, 0)]);
        }
        let mut det = 0.0;
        for col in 0..self.cols() {
            let term = self[(0, col)] * self.minor(0, col)?.expand_determinant()?;
            if col % 2 == 0 {
                det += term;
            } else {
                det -= term;
            }
        }
        Ok(det)
    }

    fn check_square(&self, op: &'static str) -> Result<(), MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        if !self.is_square() {
            return Err(MatrixError::ShapeMismatch {
                op,
                shape: self.shape(),
                other: None,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minor_drops_row_and_column_in_order() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
        assert_eq!(m.minor(0, 0).unwrap().as_slice(), &[5.0, 6.0, 8.0, 9.0]);
        assert_eq!(m.minor(1, 1).unwrap().as_slice(), &[1.0, 3.0, 7.0, 9.0]);
        assert_eq!(m.minor(2, 0).unwrap().as_slice(), &[2.0, 3.0, 5.0, 6.0]);
    }

    #[test]
    fn minor_of_2x2_is_single_element() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let minor = m.minor(0, 1).unwrap();
        assert_eq!(minor.shape(), (1, 1));
        assert_eq!(minor[(0, 0)], 3.0);
    }
}

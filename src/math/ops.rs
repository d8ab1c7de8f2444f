//! Operator forms of the [`Matrix`] arithmetic.
//!
//! Binary operators borrow both operands, never mutate them, and return
//! `Result<Matrix, MatrixError>` with exactly the errors of the named method.
//! Compound assignments mutate the left operand and, since their signatures
//! cannot carry an error, panic with the error message instead. `==` panics
//! the same way when both sides are empty.

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::error::MatrixError;
use crate::math::Matrix;

fn or_panic<T>(result: Result<T, MatrixError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn add(self, rhs: &'b Matrix) -> Self::Output {
        let mut result = self.clone();
        result.sum_matrix(rhs)?;
        Ok(result)
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn sub(self, rhs: &'b Matrix) -> Self::Output {
        let mut result = self.clone();
        result.sub_matrix(rhs)?;
        Ok(result)
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn mul(self, rhs: &'b Matrix) -> Self::Output {
        self.product(rhs)
    }
}

impl<'a> Mul<f64> for &'a Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn mul(self, rhs: f64) -> Self::Output {
        let mut result = self.clone();
        result.mul_number(rhs)?;
        Ok(result)
    }
}

impl<'b> AddAssign<&'b Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &'b Matrix) {
        or_panic(self.sum_matrix(rhs))
    }
}

impl<'b> SubAssign<&'b Matrix> for Matrix {
    fn sub_assign(&mut self, rhs: &'b Matrix) {
        or_panic(self.sub_matrix(rhs))
    }
}

impl<'b> MulAssign<&'b Matrix> for Matrix {
    fn mul_assign(&mut self, rhs: &'b Matrix) {
        or_panic(self.mul_matrix(rhs))
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, rhs: f64) {
        or_panic(self.mul_number(rhs))
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        or_panic(self.eq_matrix(other))
    }
}

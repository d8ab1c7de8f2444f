//! Integration tests for the operator trait impls.

use dense_matrix::{Matrix, MatrixError};

fn a() -> Matrix {
    Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap()
}

fn b() -> Matrix {
    Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap()
}

#[test]
fn binary_operators_do_not_mutate_operands() {
    let (x, y) = (a(), b());

    let sum = (&x + &y).unwrap();
    let diff = (&y - &x).unwrap();
    let prod = (&x * &y).unwrap();
    let scaled = (&x * 3.0).unwrap();

    assert_eq!(sum.as_slice(), &[6.0, 8.0, 10.0, 12.0]);
    assert_eq!(diff.as_slice(), &[4.0, 4.0, 4.0, 4.0]);
    assert_eq!(prod.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    assert_eq!(scaled.as_slice(), &[3.0, 6.0, 9.0, 12.0]);

    assert!(x == a());
    assert!(y == b());
}

#[test]
fn binary_operators_report_errors() {
    let x = a();
    let wide = Matrix::new(2, 3).unwrap();
    let empty = Matrix::default();

    assert!(matches!(&x + &wide, Err(MatrixError::ShapeMismatch { .. })));
    assert!(matches!(&x - &wide, Err(MatrixError::ShapeMismatch { .. })));
    assert!(matches!(&wide * &x, Err(MatrixError::ShapeMismatch { .. })));
    assert_eq!((&empty + &empty).unwrap_err(), MatrixError::EmptyMatrix);
    assert_eq!((&empty * &empty).unwrap_err(), MatrixError::EmptyMatrix);
    assert_eq!((&empty * 2.0).unwrap_err(), MatrixError::EmptyMatrix);
}

#[test]
fn compound_operators_mutate_receiver_only() {
    let y = b();
    let mut x = a();

    x += &y;
    assert_eq!(x.as_slice(), &[6.0, 8.0, 10.0, 12.0]);
    x -= &y;
    assert!(x == a());
    x *= &y;
    assert_eq!(x.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    x *= 0.5;
    assert_eq!(x.as_slice(), &[9.5, 11.0, 21.5, 25.0]);

    assert!(y == b());
}

#[test]
fn compound_matches_named_method() {
    let y = b();
    let mut via_op = a();
    let mut via_method = a();
    via_op *= &y;
    via_method.mul_matrix(&y).unwrap();
    assert!(via_op == via_method);
}

#[test]
#[should_panic(expected = "incompatible shapes")]
fn add_assign_shape_mismatch_panics() {
    let mut x = a();
    x += &Matrix::new(3, 3).unwrap();
}

#[test]
#[should_panic(expected = "non-empty")]
fn mul_assign_scalar_on_empty_panics() {
    let mut empty = Matrix::default();
    empty *= 2.0;
}

#[test]
fn eq_operator_uses_tolerance_and_shape() {
    let x = a();
    let mut noisy = a();
    noisy[(0, 0)] += 1e-9;
    assert!(x == noisy);
    assert!(x != Matrix::new(2, 3).unwrap());
}

#[test]
#[should_panic(expected = "non-empty")]
fn eq_operator_on_two_empty_panics() {
    let _ = Matrix::default() == Matrix::default();
}

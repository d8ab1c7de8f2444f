//! The dense [`Matrix`] type and its algorithms.
//!
//! `matrix` holds storage, construction, element access and resizing;
//! `arithmetic` the element-wise and product operations; `algebra` the
//! transpose, determinant, cofactor and inverse computations; `ops` the
//! operator trait impls.
mod algebra;
mod arithmetic;
mod matrix;
mod ops;

pub use matrix::Matrix;

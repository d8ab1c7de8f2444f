//! dense-matrix: a small dense `f64` matrix value type.
//!
//! The crate provides [`Matrix`], a contiguous row-major matrix with
//! in-place arithmetic, tolerant comparison, transpose, determinant by
//! cofactor expansion, the cofactor matrix and the adjugate inverse.
//! Operations report failures through [`MatrixError`]; the comparison and
//! singularity thresholds live in [`config::Tolerance`].
//!
//! The algorithms favor clarity over speed (O(n³) product, O(n!)
//! determinant) and are intended for small matrices.
pub mod config;
pub mod error;
pub mod math;

pub use config::Tolerance;
pub use error::MatrixError;
pub use math::Matrix;

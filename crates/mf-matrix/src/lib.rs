//! `mf-matrix` - Dense f64 matrix type and reference multiplication for
//! matmul-fixtures.
//!
//! This crate provides:
//! - A row-major `Matrix` type with a fixed `(rows, cols)` shape
//! - A reference matmul kernel with plain k-order f64 accumulation,
//!   suitable for producing bit-exact golden outputs

pub mod error;
pub mod matrix;
pub mod multiply;

// Re-export primary types at the crate root for convenience.
pub use error::{MatrixError, Result};
pub use matrix::Matrix;

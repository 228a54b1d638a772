//! Low-level utilities shared by the geometry routines
//!
//! Linear algebra helpers and statistical primitives used by the cubature
//! conversion and the sibling grid/projection utilities.

pub mod linalg;
pub mod stats;

pub use linalg::{is_positive_definite, lower_cholesky, symmetrize};
pub use stats::chi_square_inverse_cdf;

//! Core value types
//!
//! Fixed-size nalgebra types carry all 3-D quantities: `Vector3<f64>` for
//! positions and converted measurements, `Matrix3<f64>` for rotations,
//! covariances, and triangular covariance square roots.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// A Gaussian estimate in measurement space
///
/// The result of propagating one Cartesian measurement through the nonlinear
/// conversion: a mean (bistatic range and two direction cosines) and the full
/// covariance of the converted measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianEstimate {
    /// Mean vector [r, u, v]
    pub mean: Vector3<f64>,
    /// Covariance matrix (symmetric)
    pub covariance: Matrix3<f64>,
}

impl GaussianEstimate {
    /// Create a new estimate
    pub fn new(mean: Vector3<f64>, covariance: Matrix3<f64>) -> Self {
        Self { mean, covariance }
    }
}

//! Affine sigma-point transform
//!
//! Maps the canonical cubature points onto a specific Gaussian.

use nalgebra::{Matrix3, Vector3};

use crate::cubature::points::CubaturePointSet;

/// Affinely map cubature points onto the Gaussian N(mean, L·Lᵀ)
///
/// Each standardized point p becomes `cov_sqrt · p + mean`; weights are
/// untouched, ordering and count are preserved. A singular `cov_sqrt` is
/// valid: points simply collapse onto the mean in the zero-variance
/// dimensions.
///
/// # Arguments
/// * `set` - Canonical (standard-Gaussian) cubature points
/// * `mean` - Target mean
/// * `cov_sqrt` - Lower-triangular covariance square root L
///
/// # Returns
/// Transformed points, aligned with the set's weights
pub fn transform_sigma_points(
    set: &CubaturePointSet,
    mean: &Vector3<f64>,
    cov_sqrt: &Matrix3<f64>,
) -> Vec<Vector3<f64>> {
    set.points().iter().map(|p| cov_sqrt * p + mean).collect()
}

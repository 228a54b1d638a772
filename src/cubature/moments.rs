//! Weighted moment reconstruction
//!
//! Recombines a weighted point cloud into its mean and covariance. This is
//! the back half of the cubature approximation: the transformed sigma points
//! in measurement space carry the full distribution, and their weighted
//! moments estimate the converted Gaussian.

use nalgebra::{Matrix3, Vector3};

use crate::common::linalg::symmetrize;

/// Weighted mean and covariance of a point cloud
///
/// μ = Σ wᵢ·xᵢ and Σ = Σ wᵢ·(xᵢ−μ)(xᵢ−μ)ᵀ, with the covariance symmetrized
/// before return to remove floating-point asymmetry. Assumes the weights sum
/// to 1; NaN/Inf inputs propagate through unchecked (upstream validation is
/// the geometry's job, not this routine's).
///
/// # Arguments
/// * `points` - Points in output space
/// * `weights` - Matching weights
///
/// # Returns
/// (mean, covariance)
pub fn weighted_moments(points: &[Vector3<f64>], weights: &[f64]) -> (Vector3<f64>, Matrix3<f64>) {
    let mut mean = Vector3::zeros();
    for (p, w) in points.iter().zip(weights) {
        mean += *w * p;
    }

    let mut covariance = Matrix3::zeros();
    for (p, w) in points.iter().zip(weights) {
        let d = p - mean;
        covariance += (d * d.transpose()) * *w;
    }

    (mean, symmetrize(&covariance))
}

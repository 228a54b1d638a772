//! Covariance-ellipsoid sampling grids
//!
//! Generates deterministic point grids on the confidence ellipsoid of a 3-D
//! Gaussian: a spherical azimuth/elevation grid of unit directions, scaled
//! by the chi-square radius of the requested probability mass, mapped
//! through the lower Cholesky factor of the covariance, and shifted by the
//! mean.

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::{Matrix3, Vector3};

use crate::common::linalg::lower_cholesky;
use crate::common::stats::chi_square_inverse_cdf;
use crate::errors::GeometryError;

/// Sampling grid on the confidence ellipsoid of a Gaussian
///
/// Points lie on the shell {x : (x−μ)ᵀΣ⁻¹(x−μ) = χ²⁻¹(prob, 3)}. Elevations
/// are offset by half a step so the poles are not duplicated; azimuths wrap
/// the full circle. The grid has `n_az · n_el` points, ordered elevation-major.
///
/// # Arguments
/// * `mean` - Ellipsoid center μ
/// * `covariance` - Positive-definite covariance Σ
/// * `prob` - Probability mass enclosed by the shell, in (0, 1)
/// * `n_az` - Number of azimuth samples (≥ 1)
/// * `n_el` - Number of elevation samples (≥ 1)
///
/// # Errors
/// * `Configuration` for prob outside (0, 1) or zero grid counts
/// * `SingularMatrix` if the covariance has no Cholesky factor
pub fn cov_ellipse_grid_points(
    mean: &Vector3<f64>,
    covariance: &Matrix3<f64>,
    prob: f64,
    n_az: usize,
    n_el: usize,
) -> Result<Vec<Vector3<f64>>, GeometryError> {
    if n_az == 0 || n_el == 0 {
        return Err(GeometryError::Configuration {
            description: format!("grid counts must be positive, got {}x{}", n_az, n_el),
        });
    }
    let radius = chi_square_inverse_cdf(prob, 3)?.sqrt();
    let factor = lower_cholesky(covariance).ok_or_else(|| GeometryError::SingularMatrix {
        context: "grid covariance".to_string(),
    })?;

    let mut points = Vec::with_capacity(n_az * n_el);
    for i in 0..n_el {
        let el = -FRAC_PI_2 + PI * (i as f64 + 0.5) / n_el as f64;
        let (sin_el, cos_el) = el.sin_cos();
        for j in 0..n_az {
            let az = 2.0 * PI * j as f64 / n_az as f64;
            let dir = Vector3::new(cos_el * az.cos(), cos_el * az.sin(), sin_el);
            points.push(mean + radius * (factor * dir));
        }
    }
    Ok(points)
}

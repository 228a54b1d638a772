//! Statistical primitives
//!
//! Shared numeric primitives backed by `statrs`. The chi-square inverse CDF
//! sizes the covariance-ellipsoid shell used by the grid generator.

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::errors::GeometryError;

/// Inverse CDF of the chi-square distribution
///
/// Returns the value x such that P(X ≤ x) = `prob` for X chi-square
/// distributed with `dim` degrees of freedom.
///
/// # Arguments
/// * `prob` - Probability, must lie strictly in (0, 1)
/// * `dim` - Degrees of freedom, must be ≥ 1
///
/// # Errors
/// * `InvalidDimension` if `dim` is 0
/// * `Configuration` if `prob` is outside (0, 1)
pub fn chi_square_inverse_cdf(prob: f64, dim: usize) -> Result<f64, GeometryError> {
    if dim == 0 {
        return Err(GeometryError::InvalidDimension { dim });
    }
    if !(prob > 0.0 && prob < 1.0) {
        return Err(GeometryError::Configuration {
            description: format!("probability {} is outside (0, 1)", prob),
        });
    }
    let dist = ChiSquared::new(dim as f64).map_err(|e| GeometryError::Configuration {
        description: format!("chi-square distribution: {}", e),
    })?;
    Ok(dist.inverse_cdf(prob))
}

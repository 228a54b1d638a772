//! Linear algebra utilities
//!
//! Small matrix helpers required by the cubature conversion and the
//! covariance-ellipsoid grid generator.

use nalgebra::Matrix3;

/// Make a matrix symmetric
///
/// Ensures a matrix is symmetric by averaging with its transpose. Used to
/// remove floating-point asymmetry from reconstructed covariances.
///
/// # Arguments
/// * `matrix` - Matrix to symmetrize
///
/// # Returns
/// Symmetric matrix
pub fn symmetrize(matrix: &Matrix3<f64>) -> Matrix3<f64> {
    0.5 * (matrix + matrix.transpose())
}

/// Check if a matrix is positive definite
///
/// # Arguments
/// * `matrix` - Matrix to check
///
/// # Returns
/// true if positive definite
pub fn is_positive_definite(matrix: &Matrix3<f64>) -> bool {
    matrix.cholesky().is_some()
}

/// Lower-triangular Cholesky square root of a covariance matrix
///
/// # Arguments
/// * `covariance` - Symmetric positive-definite matrix
///
/// # Returns
/// Lower-triangular factor L with L·Lᵀ = covariance, or None if the matrix
/// is not positive definite
pub fn lower_cholesky(covariance: &Matrix3<f64>) -> Option<Matrix3<f64>> {
    covariance.cholesky().map(|c| c.l())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Matrix3;

    #[test]
    fn test_symmetrize_is_exact() {
        let m = Matrix3::new(
            1.0, 2.0, 3.0, //
            2.0 + 1e-13, 5.0, 6.0, //
            3.0 - 1e-13, 6.0 + 1e-13, 9.0,
        );
        let s = symmetrize(&m);
        assert_eq!(s, s.transpose());
    }

    #[test]
    fn test_lower_cholesky_roundtrip() {
        let cov = Matrix3::new(
            4.0, 2.0, 0.0, //
            2.0, 5.0, 1.0, //
            0.0, 1.0, 3.0,
        );
        let l = lower_cholesky(&cov).unwrap();
        // Strictly lower triangular
        assert_eq!(l[(0, 1)], 0.0);
        assert_eq!(l[(0, 2)], 0.0);
        assert_eq!(l[(1, 2)], 0.0);
        assert_relative_eq!(l * l.transpose(), cov, epsilon = 1e-12);
    }

    #[test]
    fn test_positive_definite() {
        assert!(is_positive_definite(&Matrix3::identity()));
        assert!(!is_positive_definite(&Matrix3::zeros()));
        let indefinite = Matrix3::new(
            1.0, 0.0, 0.0, //
            0.0, -1.0, 0.0, //
            0.0, 0.0, 1.0,
        );
        assert!(!is_positive_definite(&indefinite));
    }
}

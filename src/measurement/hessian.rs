//! Second derivatives of measurement components
//!
//! Closed-form Hessians of the direction cosines (and the bistatic range)
//! with respect to the global Cartesian target position. Used by consumers
//! that need curvature information about the measurement function, e.g. for
//! second-order bias corrections.

use nalgebra::{Matrix3, Vector3};

use crate::errors::GeometryError;

/// Hessian of tᵢ/‖t‖ with respect to the local-frame coordinates t
fn direction_cosine_hessian_local(t: &Vector3<f64>, axis: usize) -> Matrix3<f64> {
    let r = t.norm();
    let r3 = r * r * r;
    let r5 = r3 * r * r;
    let mut e = Vector3::zeros();
    e[axis] = 1.0;
    let ta = t[axis];

    -(e * t.transpose() + t * e.transpose()) / r3 - (ta / r3) * Matrix3::identity()
        + (3.0 * ta / r5) * (t * t.transpose())
}

/// Hessians of the direction cosines u and v
///
/// For the local line of sight t = M·(point − rx), the direction cosines are
/// u = t_x/‖t‖ and v = t_y/‖t‖. This returns their Hessians with respect to
/// the global Cartesian position (the local Hessians conjugated by the
/// orthonormal orientation: Mᵀ·H·M).
///
/// # Arguments
/// * `point` - Target position (meters)
/// * `rx_position` - Receiver position (meters)
/// * `rx_orientation` - Rotation from global to receiver-local coordinates
///
/// # Returns
/// (H_u, H_v), each a symmetric 3×3 matrix
///
/// # Errors
/// `DegenerateGeometry` if the point coincides with the receiver
pub fn uv_hessians(
    point: &Vector3<f64>,
    rx_position: &Vector3<f64>,
    rx_orientation: &Matrix3<f64>,
) -> Result<(Matrix3<f64>, Matrix3<f64>), GeometryError> {
    let t = rx_orientation * (point - rx_position);
    if t.norm() == 0.0 {
        return Err(GeometryError::DegenerateGeometry {
            context: "direction-cosine Hessian at zero range".to_string(),
        });
    }

    let h_u = rx_orientation.transpose() * direction_cosine_hessian_local(&t, 0) * rx_orientation;
    let h_v = rx_orientation.transpose() * direction_cosine_hessian_local(&t, 1) * rx_orientation;
    Ok((h_u, h_v))
}

/// Hessian of ‖point − origin‖ with respect to the point
fn range_hessian_about(point: &Vector3<f64>, origin: &Vector3<f64>) -> Option<Matrix3<f64>> {
    let d = point - origin;
    let r = d.norm();
    if r == 0.0 {
        return None;
    }
    Some((Matrix3::identity() - (d * d.transpose()) / (r * r)) / r)
}

/// Hessian of the geometric bistatic range
///
/// Second derivative of ‖point − tx‖ + ‖point − rx‖ with respect to the
/// global Cartesian position, halved if `use_half_range` is set (matching
/// the range convention of the measurement conversion).
///
/// # Errors
/// `DegenerateGeometry` if the point coincides with the transmitter or the
/// receiver
pub fn bistatic_range_hessian(
    point: &Vector3<f64>,
    tx_position: &Vector3<f64>,
    rx_position: &Vector3<f64>,
    use_half_range: bool,
) -> Result<Matrix3<f64>, GeometryError> {
    let tx_term = range_hessian_about(point, tx_position).ok_or_else(|| {
        GeometryError::DegenerateGeometry {
            context: "range Hessian at the transmitter".to_string(),
        }
    })?;
    let rx_term = range_hessian_about(point, rx_position).ok_or_else(|| {
        GeometryError::DegenerateGeometry {
            context: "range Hessian at the receiver".to_string(),
        }
    })?;

    let mut hessian = tx_term + rx_term;
    if use_half_range {
        hessian *= 0.5;
    }
    Ok(hessian)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::Rotation3;

    /// Central finite-difference Hessian of a scalar function of position
    fn numerical_hessian<F: Fn(&Vector3<f64>) -> f64>(f: F, x: &Vector3<f64>) -> Matrix3<f64> {
        let h = 10.0;
        let mut hess = Matrix3::zeros();
        for i in 0..3 {
            for j in 0..3 {
                let mut ei = Vector3::zeros();
                let mut ej = Vector3::zeros();
                ei[i] = h;
                ej[j] = h;
                if i == j {
                    hess[(i, j)] = (f(&(x + ei)) - 2.0 * f(x) + f(&(x - ei))) / (h * h);
                } else {
                    hess[(i, j)] = (f(&(x + ei + ej)) - f(&(x + ei - ej)) - f(&(x - ei + ej))
                        + f(&(x - ei - ej)))
                        / (4.0 * h * h);
                }
            }
        }
        hess
    }

    #[test]
    fn test_uv_hessians_match_finite_differences() {
        let rx = Vector3::new(10.0, 20.0, 30.0);
        let m = Rotation3::from_euler_angles(0.2, -0.1, 0.3).into_inner();
        let point = Vector3::new(500.0, 300.0, 1200.0);

        let (h_u, h_v) = uv_hessians(&point, &rx, &m).unwrap();

        let u = |p: &Vector3<f64>| {
            let t = m * (p - rx);
            t.x / t.norm()
        };
        let v = |p: &Vector3<f64>| {
            let t = m * (p - rx);
            t.y / t.norm()
        };

        let h_u_num = numerical_hessian(u, &point);
        let h_v_num = numerical_hessian(v, &point);
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(h_u[(i, j)], h_u_num[(i, j)], epsilon = 1e-9);
                assert_abs_diff_eq!(h_v[(i, j)], h_v_num[(i, j)], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_uv_hessians_are_symmetric() {
        let rx = Vector3::zeros();
        let m = Rotation3::from_euler_angles(0.5, 0.1, -0.7).into_inner();
        let (h_u, h_v) = uv_hessians(&Vector3::new(-800.0, 250.0, 400.0), &rx, &m).unwrap();
        assert_abs_diff_eq!((h_u - h_u.transpose()).norm(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!((h_v - h_v.transpose()).norm(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_range_hessian_matches_finite_differences() {
        let tx = Vector3::new(-2000.0, 100.0, 0.0);
        let rx = Vector3::new(1500.0, -300.0, 50.0);
        let point = Vector3::new(400.0, 900.0, 2500.0);

        let hessian = bistatic_range_hessian(&point, &tx, &rx, false).unwrap();
        let r = |p: &Vector3<f64>| (p - tx).norm() + (p - rx).norm();
        let numerical = numerical_hessian(r, &point);
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(hessian[(i, j)], numerical[(i, j)], epsilon = 1e-8);
            }
        }

        let half = bistatic_range_hessian(&point, &tx, &rx, true).unwrap();
        assert_abs_diff_eq!((half - 0.5 * hessian).norm(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_range_is_degenerate() {
        let rx = Vector3::new(1.0, 2.0, 3.0);
        assert!(uv_hessians(&rx, &rx, &Matrix3::identity()).is_err());
        assert!(bistatic_range_hessian(&rx, &Vector3::zeros(), &rx, false).is_err());
    }
}

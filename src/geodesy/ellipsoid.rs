//! Reference-ellipsoid geometry
//!
//! Height above an oblate reference ellipsoid for an Earth-centered Cartesian
//! point. The ellipsoid is parameterized by its semi-major axis and
//! flattening so non-WGS-84 ellipsoids can be substituted.

use nalgebra::Vector3;

/// WGS-84 semi-major axis (meters)
pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6378137.0;

/// WGS-84 flattening factor
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257223563;

/// Height of a Cartesian point above the reference ellipsoid
///
/// Uses Bowring's parametric-latitude initial guess followed by a short
/// fixed-point refinement of the geodetic latitude. The height is evaluated
/// with the projection formula h = p·cos φ + z·sin φ − a·√(1 − e²·sin²φ),
/// which stays well-conditioned at the poles.
///
/// # Arguments
/// * `point` - Earth-centered Cartesian point (meters)
/// * `semi_major_axis` - Ellipsoid semi-major axis a (meters)
/// * `flattening` - Ellipsoid flattening f
///
/// # Returns
/// Signed height above the ellipsoid surface (meters); negative below it
pub fn ellipsoid_height(point: &Vector3<f64>, semi_major_axis: f64, flattening: f64) -> f64 {
    let a = semi_major_axis;
    let f = flattening;
    let b = a * (1.0 - f);
    let e2 = f * (2.0 - f);
    let ep2 = e2 / (1.0 - e2);

    let p = point.x.hypot(point.y);
    let z = point.z;

    // On the polar axis the geodetic normal is the axis itself
    if p < 1e-9 {
        return z.abs() - b;
    }

    // Bowring's initial guess for the geodetic latitude
    let theta = (z * a).atan2(p * b);
    let (st, ct) = theta.sin_cos();
    let mut lat = (z + ep2 * b * st.powi(3)).atan2(p - e2 * a * ct.powi(3));

    for _ in 0..4 {
        let sl = lat.sin();
        let n = a / (1.0 - e2 * sl * sl).sqrt();
        let h = p * lat.cos() + z * sl - a * (1.0 - e2 * sl * sl).sqrt();
        lat = z.atan2(p * (1.0 - e2 * n / (n + h)));
    }

    let sl = lat.sin();
    p * lat.cos() + z * sl - a * (1.0 - e2 * sl * sl).sqrt()
}

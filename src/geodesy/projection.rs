//! Orthographic tangent-plane projection
//!
//! Projects spherical (azimuth, elevation) directions onto the plane tangent
//! to the unit sphere at a reference direction, and back. The forward
//! projection is the view of the unit sphere from infinity along the
//! reference direction; the inverse is defined on the closed unit disk.

use nalgebra::Vector2;

use crate::errors::GeometryError;

/// Orthographic projection of a spherical direction onto a tangent plane
///
/// # Arguments
/// * `az` - Azimuth of the direction to project (radians)
/// * `el` - Elevation of the direction to project (radians)
/// * `az0` - Azimuth of the tangent point (radians)
/// * `el0` - Elevation of the tangent point (radians)
///
/// # Returns
/// Plane coordinates [x, y]; the tangent point maps to the origin
pub fn orthographic_project(az: f64, el: f64, az0: f64, el0: f64) -> Vector2<f64> {
    let x = el.cos() * (az - az0).sin();
    let y = el0.cos() * el.sin() - el0.sin() * el.cos() * (az - az0).cos();
    Vector2::new(x, y)
}

/// Inverse orthographic projection
///
/// Recovers the spherical direction on the near hemisphere that projects to
/// the given plane point.
///
/// # Arguments
/// * `xy` - Plane coordinates
/// * `az0` - Azimuth of the tangent point (radians)
/// * `el0` - Elevation of the tangent point (radians)
///
/// # Returns
/// (azimuth, elevation) in radians
///
/// # Errors
/// `Configuration` if the point lies outside the unit projection disk
pub fn orthographic_unproject(
    xy: &Vector2<f64>,
    az0: f64,
    el0: f64,
) -> Result<(f64, f64), GeometryError> {
    let rho = xy.norm();
    if rho > 1.0 + 1e-12 {
        return Err(GeometryError::Configuration {
            description: format!("point with radius {} is outside the projection disk", rho),
        });
    }
    if rho == 0.0 {
        return Ok((az0, el0));
    }
    let c = rho.min(1.0).asin();
    let (sc, cc) = c.sin_cos();
    let el = (cc * el0.sin() + xy.y * sc * el0.cos() / rho).clamp(-1.0, 1.0).asin();
    let az = az0 + (xy.x * sc).atan2(rho * cc * el0.cos() - xy.y * sc * el0.sin());
    Ok((az, el))
}

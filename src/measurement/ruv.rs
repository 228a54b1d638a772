//! Cartesian to refraction-corrupted bistatic r-u-v conversion
//!
//! The nonlinear measurement model at the heart of the cubature propagation:
//! a Cartesian point maps to its bistatic range (refraction-biased) and the
//! two direction cosines of its receiver-local line of sight.

use nalgebra::Vector3;

use crate::errors::GeometryError;
use crate::measurement::geometry::MeasurementGeometry;
use crate::measurement::refraction::refraction_range_bias;

/// Convert a Cartesian point to refracted bistatic [r, u, v]
///
/// Steps, in order:
/// 1. rotate/translate the point into the receiver-local frame,
/// 2. form the geometric bistatic range (transmitter→point plus
///    point→receiver) and the direction cosines u, v of the local line of
///    sight,
/// 3. add the exponential-atmosphere refraction range bias,
/// 4. halve the range if the geometry's half-range flag is set.
///
/// Refraction biases the range only; u and v are purely geometric.
///
/// # Arguments
/// * `point` - Cartesian position (meters, Earth-centered)
/// * `geometry` - Shared transmitter/receiver geometry and atmosphere
///
/// # Returns
/// [bistatic range (m), u, v]
///
/// # Errors
/// `DegenerateGeometry` if the point coincides with the receiver (direction
/// cosines undefined)
pub fn cart_to_ruv(
    point: &Vector3<f64>,
    geometry: &MeasurementGeometry,
) -> Result<Vector3<f64>, GeometryError> {
    let local = geometry.rx_orientation * (point - geometry.rx_position);
    let rx_range = local.norm();
    if rx_range == 0.0 {
        return Err(GeometryError::DegenerateGeometry {
            context: "point coincides with the receiver".to_string(),
        });
    }

    let geometric = (point - geometry.tx_position).norm() + rx_range;
    let bias = refraction_range_bias(point, geometry);

    let mut range = geometric + bias;
    if geometry.use_half_range {
        range *= 0.5;
    }

    Ok(Vector3::new(range, local.x / rx_range, local.y / rx_range))
}

//! Exponential-atmosphere refraction
//!
//! Range bias induced by atmospheric propagation delay under an exponential
//! refractivity profile N(h) = Ns·exp(−ce·h). The one-way bias of a straight
//! propagation leg is the path integral of 10⁻⁶·N(h); with height varying
//! linearly along the leg the integral has the closed form
//!
//!   ΔR = 10⁻⁶·Ns·L·(e^(−ce·h₁) − e^(−ce·h₂)) / (ce·(h₂ − h₁))
//!
//! degenerating to 10⁻⁶·Ns·L·e^(−ce·h) when the endpoint heights agree.
//! Heights are clamped at the ellipsoid surface: below it the refractivity
//! is held at the surface value Ns. Only range is biased; direction cosines
//! are left untouched by this model.

use nalgebra::Vector3;

use crate::geodesy::ellipsoid::ellipsoid_height;
use crate::measurement::geometry::{AtmosphereModel, MeasurementGeometry};

/// Endpoint heights closer than this are integrated with the midpoint value
const EQUAL_HEIGHT_TOLERANCE: f64 = 1e-3;

/// Refractivity decay constant from surface refractivity
///
/// The fixed empirical relation ΔN = −7.32·exp(0.005577·Ns),
/// ce = ln(Ns/(Ns+ΔN))/1000. Deterministic: the same Ns always produces the
/// same bits.
///
/// # Arguments
/// * `surface_refractivity` - Ns in N-units (must be positive)
///
/// # Returns
/// Decay constant ce in 1/meters
pub fn decay_constant_from_refractivity(surface_refractivity: f64) -> f64 {
    let ns = surface_refractivity;
    let delta_n = -7.32 * (0.005577 * ns).exp();
    (ns / (ns + delta_n)).ln() / 1000.0
}

/// One-way refraction range bias of a straight leg from `start` to `end`
fn leg_range_bias(start: &Vector3<f64>, end: &Vector3<f64>, atmosphere: &AtmosphereModel) -> f64 {
    let length = (end - start).norm();
    if length == 0.0 {
        return 0.0;
    }

    let a = atmosphere.semi_major_axis;
    let f = atmosphere.flattening;
    let ce = atmosphere.decay_constant;

    // Profile held at the surface value below the ellipsoid
    let h1 = ellipsoid_height(start, a, f).max(0.0);
    let h2 = ellipsoid_height(end, a, f).max(0.0);

    let profile_integral = if (h2 - h1).abs() < EQUAL_HEIGHT_TOLERANCE {
        (-ce * 0.5 * (h1 + h2)).exp()
    } else {
        ((-ce * h1).exp() - (-ce * h2).exp()) / (ce * (h2 - h1))
    };

    1.0e-6 * atmosphere.surface_refractivity * length * profile_integral
}

/// Two-way refraction range bias for a bistatic path
///
/// Sum of the one-way biases of the transmitter→point and point→receiver
/// legs. The caller applies the half-range normalization together with the
/// geometric range, so the flag does not enter here.
///
/// # Arguments
/// * `point` - Target position (meters, Earth-centered Cartesian)
/// * `geometry` - Transmitter/receiver geometry and atmosphere
///
/// # Returns
/// Delay-equivalent range bias (meters, non-negative)
pub fn refraction_range_bias(point: &Vector3<f64>, geometry: &MeasurementGeometry) -> f64 {
    let atmosphere = &geometry.atmosphere;
    leg_range_bias(&geometry.tx_position, point, atmosphere)
        + leg_range_bias(point, &geometry.rx_position, atmosphere)
}

//! Measurement geometry and atmosphere configuration
//!
//! All defaults live here, in one place: Ns = 313 N-units, decay constant
//! derived from Ns by the standard empirical formula, WGS-84 ellipsoid,
//! identity receiver orientation, two-way (full bistatic) range.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::geodesy::ellipsoid::{WGS84_FLATTENING, WGS84_SEMI_MAJOR_AXIS};
use crate::measurement::refraction::decay_constant_from_refractivity;

/// Exponential atmospheric refractivity model
///
/// Refractivity decays exponentially with height above the reference
/// ellipsoid: N(h) = Ns·exp(−ce·h). Below the ellipsoid surface the profile
/// is held at the surface value Ns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereModel {
    /// Surface refractivity Ns (N-units)
    pub surface_refractivity: f64,
    /// Refractivity decay constant ce (1/meters)
    pub decay_constant: f64,
    /// Reference-ellipsoid semi-major axis a (meters)
    pub semi_major_axis: f64,
    /// Reference-ellipsoid flattening f
    pub flattening: f64,
}

impl AtmosphereModel {
    /// Default surface refractivity (N-units)
    pub const DEFAULT_SURFACE_REFRACTIVITY: f64 = 313.0;

    /// Create a model for the given surface refractivity
    ///
    /// The decay constant is derived from Ns by the fixed empirical formula
    /// (see [`decay_constant_from_refractivity`]); the ellipsoid is WGS-84.
    pub fn new(surface_refractivity: f64) -> Self {
        Self {
            surface_refractivity,
            decay_constant: decay_constant_from_refractivity(surface_refractivity),
            semi_major_axis: WGS84_SEMI_MAJOR_AXIS,
            flattening: WGS84_FLATTENING,
        }
    }

    /// Replace the reference ellipsoid
    pub fn with_ellipsoid(mut self, semi_major_axis: f64, flattening: f64) -> Self {
        self.semi_major_axis = semi_major_axis;
        self.flattening = flattening;
        self
    }
}

impl Default for AtmosphereModel {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SURFACE_REFRACTIVITY)
    }
}

/// Immutable per-batch measurement geometry
///
/// Transmitter and receiver positions are Earth-centered Cartesian (meters).
/// The orientation matrix rotates global coordinates into the receiver's
/// local frame (`local = M·(point − rx)`); its rows are the receiver's local
/// axes, with local z the boresight and local x, y the direction-cosine
/// (u, v) axes. Shared read-only across all measurements of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementGeometry {
    /// Transmitter position (meters)
    pub tx_position: Vector3<f64>,
    /// Receiver position (meters)
    pub rx_position: Vector3<f64>,
    /// Rotation from global to receiver-local coordinates (orthonormal)
    pub rx_orientation: Matrix3<f64>,
    /// If true, ranges are normalized to one-way (half the bistatic sum)
    pub use_half_range: bool,
    /// Atmospheric refractivity model
    pub atmosphere: AtmosphereModel,
}

impl MeasurementGeometry {
    /// Create a geometry with identity orientation, two-way range, and the
    /// default atmosphere
    pub fn new(tx_position: Vector3<f64>, rx_position: Vector3<f64>) -> Self {
        Self {
            tx_position,
            rx_position,
            rx_orientation: Matrix3::identity(),
            use_half_range: false,
            atmosphere: AtmosphereModel::default(),
        }
    }

    /// Create a monostatic geometry (collocated transmitter and receiver)
    pub fn monostatic(position: Vector3<f64>) -> Self {
        Self::new(position, position)
    }

    /// Set the receiver orientation matrix
    pub fn with_orientation(mut self, rx_orientation: Matrix3<f64>) -> Self {
        self.rx_orientation = rx_orientation;
        self
    }

    /// Set the half-range normalization flag
    pub fn with_half_range(mut self, use_half_range: bool) -> Self {
        self.use_half_range = use_half_range;
        self
    }

    /// Replace the atmosphere model
    pub fn with_atmosphere(mut self, atmosphere: AtmosphereModel) -> Self {
        self.atmosphere = atmosphere;
        self
    }
}

/*!
# Sensorgeom - Sensor-measurement geometry library

Independent numerical routines supporting sensor-measurement geometry for
tracking systems, centered on cubature-based propagation of measurement
uncertainty through a refraction-corrupted coordinate conversion.

## Features

- Degree-5 cubature rule for standard Gaussian integrals (pluggable)
- Cartesian → bistatic range / direction-cosine conversion with an
  exponential-atmosphere refraction bias on the range
- Batch uncertainty propagation with per-measurement error isolation and a
  rayon-parallel inner loop
- Covariance-ellipsoid sampling grids, orthographic tangent-plane
  projection, and direction-cosine Hessians as sibling utilities

## Modules

- [`cubature`] - Cubature rule, sigma-point transform, moment
  reconstruction, batch propagator
- [`measurement`] - Measurement geometry, refraction model, r-u-v
  conversion, measurement Hessians
- [`geodesy`] - Reference-ellipsoid height, tangent-plane projection
- [`grid`] - Covariance-ellipsoid sampling grids
- [`common`] - Low-level linear algebra and statistics utilities

## Example

```rust,no_run
use nalgebra::{Matrix3, Vector3};
use sensorgeom::{CubaturePropagator, MeasurementGeometry};

// Monostatic radar at the origin of the local scene frame
let geometry = MeasurementGeometry::monostatic(Vector3::zeros());
let propagator = CubaturePropagator::new(geometry);

// One Cartesian measurement: mean and lower-triangular covariance sqrt
let means = vec![Vector3::new(10_000.0, 2_000.0, 500.0)];
let cov_sqrts = vec![Matrix3::identity() * 15.0];

let results = propagator.propagate(&means, &cov_sqrts).unwrap();
let estimate = results[0].as_ref().unwrap();
println!("range {} m, covariance {}", estimate.mean.x, estimate.covariance);
```
*/

// ============================================================================
// Core modules
// ============================================================================

/// Cubature rule, sigma-point transform, moment reconstruction, and the
/// batch uncertainty propagator
pub mod cubature;

/// Measurement geometry, exponential-atmosphere refraction, the nonlinear
/// r-u-v conversion, and measurement Hessians
pub mod measurement;

/// Geodesy primitives: ellipsoid height, orthographic projection
pub mod geodesy;

/// Covariance-ellipsoid sampling grids
pub mod grid;

/// Low-level utilities (linear algebra, statistics)
pub mod common;

/// Error types
pub mod errors;

/// Core value types
pub mod types;

// ============================================================================
// Re-exports for convenience
// ============================================================================

// Core types
pub use types::GaussianEstimate;

// Errors
pub use errors::GeometryError;

// Cubature machinery
pub use cubature::{
    fifth_order_cubature_points, transform_sigma_points, weighted_moments, CubaturePointSet,
    CubaturePropagator, MeasurementResult,
};

// Measurement model
pub use measurement::{
    bistatic_range_hessian, cart_to_ruv, decay_constant_from_refractivity,
    refraction_range_bias, uv_hessians, AtmosphereModel, MeasurementGeometry,
};

// Geodesy
pub use geodesy::{
    ellipsoid_height, orthographic_project, orthographic_unproject, WGS84_FLATTENING,
    WGS84_SEMI_MAJOR_AXIS,
};

// Grids and shared primitives
pub use common::chi_square_inverse_cdf;
pub use grid::cov_ellipse_grid_points;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

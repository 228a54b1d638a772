//! Cubature-based uncertainty propagation
//!
//! Deterministic sigma-point machinery: a degree-5 cubature rule for the
//! standard Gaussian, the affine transform onto a specific Gaussian, weighted
//! moment reconstruction, and the batch propagator that composes them with
//! the nonlinear measurement model.

pub mod moments;
pub mod points;
pub mod propagator;
pub mod transform;

pub use moments::weighted_moments;
pub use points::{fifth_order_cubature_points, CubaturePointSet};
pub use propagator::{CubaturePropagator, MeasurementResult};
pub use transform::transform_sigma_points;

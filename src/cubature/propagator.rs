//! Batch cubature uncertainty propagation
//!
//! Orchestrates the conversion of Cartesian Gaussian measurements into
//! refraction-corrupted bistatic r-u-v Gaussians: sigma points from the
//! input mean and covariance square root, the nonlinear measurement model
//! per point, weighted moment reconstruction per measurement. Measurements
//! are independent, so the batch runs as a parallel map over shared
//! read-only geometry and cubature points.

use nalgebra::{Matrix3, Vector3};
use rayon::prelude::*;

use crate::cubature::moments::weighted_moments;
use crate::cubature::points::CubaturePointSet;
use crate::cubature::transform::transform_sigma_points;
use crate::errors::GeometryError;
use crate::measurement::geometry::MeasurementGeometry;
use crate::measurement::ruv::cart_to_ruv;
use crate::types::GaussianEstimate;

/// Outcome of one measurement's conversion
///
/// Geometry failures are isolated per measurement: one degenerate input does
/// not abort the rest of the batch.
pub type MeasurementResult = Result<GaussianEstimate, GeometryError>;

/// Cubature propagator for a batch of Cartesian measurements
///
/// Holds the shared per-batch state: the measurement geometry and the
/// cubature rule. Both are immutable for the propagator's lifetime, so a
/// single propagator can serve any number of batches, from any number of
/// threads.
#[derive(Debug, Clone)]
pub struct CubaturePropagator {
    geometry: MeasurementGeometry,
    points: CubaturePointSet,
}

impl CubaturePropagator {
    /// Create a propagator with the default degree-5 cubature rule
    pub fn new(geometry: MeasurementGeometry) -> Self {
        Self {
            geometry,
            points: CubaturePointSet::fifth_order(),
        }
    }

    /// Create a propagator with a caller-supplied cubature rule
    pub fn with_points(geometry: MeasurementGeometry, points: CubaturePointSet) -> Self {
        Self { geometry, points }
    }

    /// The shared measurement geometry
    pub fn geometry(&self) -> &MeasurementGeometry {
        &self.geometry
    }

    /// The cubature rule in use
    pub fn points(&self) -> &CubaturePointSet {
        &self.points
    }

    /// Propagate a batch of Cartesian Gaussian measurements
    ///
    /// `cov_sqrts` supplies the lower-triangular covariance square roots:
    /// either one per measurement, or a single matrix broadcast to the whole
    /// batch (the same matrix is reused, not recomputed). Results are
    /// index-aligned with `means`; per-measurement geometry failures appear
    /// as `Err` entries without affecting their neighbors.
    ///
    /// # Errors
    /// `ShapeMismatch` (batch-level, before any work) if `cov_sqrts` has
    /// neither 1 nor `means.len()` entries
    pub fn propagate(
        &self,
        means: &[Vector3<f64>],
        cov_sqrts: &[Matrix3<f64>],
    ) -> Result<Vec<MeasurementResult>, GeometryError> {
        if cov_sqrts.len() != 1 && cov_sqrts.len() != means.len() {
            return Err(GeometryError::ShapeMismatch {
                expected: means.len(),
                actual: cov_sqrts.len(),
                context: "covariance square roots".to_string(),
            });
        }

        Ok(means
            .par_iter()
            .enumerate()
            .map(|(i, mean)| {
                let cov_sqrt = if cov_sqrts.len() == 1 {
                    &cov_sqrts[0]
                } else {
                    &cov_sqrts[i]
                };
                self.convert_one(mean, cov_sqrt)
            })
            .collect())
    }

    /// Propagate a single measurement
    pub fn propagate_single(
        &self,
        mean: &Vector3<f64>,
        cov_sqrt: &Matrix3<f64>,
    ) -> MeasurementResult {
        self.convert_one(mean, cov_sqrt)
    }

    fn convert_one(&self, mean: &Vector3<f64>, cov_sqrt: &Matrix3<f64>) -> MeasurementResult {
        let sigma_points = transform_sigma_points(&self.points, mean, cov_sqrt);

        let mut mapped = Vec::with_capacity(sigma_points.len());
        for point in &sigma_points {
            mapped.push(cart_to_ruv(point, &self.geometry)?);
        }

        let (mean, covariance) = weighted_moments(&mapped, self.points.weights());
        Ok(GaussianEstimate::new(mean, covariance))
    }
}

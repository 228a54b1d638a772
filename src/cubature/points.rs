//! Degree-5 cubature rule for standard Gaussian integrals
//!
//! The McNamee–Stenger point family: the origin, the axial points ±√3·eᵢ,
//! and the paired points with ±√3 in two coordinates. For dimension n this
//! gives 2n² + 1 points whose weighted sums integrate all polynomials of
//! degree ≤ 5 exactly against the standard Gaussian density. Fully
//! deterministic: the same dimensionality always produces the same points in
//! the same order.

use nalgebra::{DMatrix, DVector, Vector3};

use crate::errors::GeometryError;

/// Degree-5 rule for dimension `dim` (must be ≥ 1)
fn fifth_order_rule(dim: usize) -> (DMatrix<f64>, DVector<f64>) {
    let n = dim;
    let nf = n as f64;
    let num_points = 2 * n * n + 1;

    let w_center = 1.0 + (nf * nf - 7.0 * nf) / 18.0;
    let w_axial = (4.0 - nf) / 18.0;
    let w_pair = 1.0 / 36.0;
    let s = 3.0_f64.sqrt();

    let mut points = DMatrix::zeros(n, num_points);
    let mut weights = DVector::zeros(num_points);

    // Center point
    weights[0] = w_center;
    let mut col = 1;

    // Axial points ±√3·e_i
    for i in 0..n {
        for sign in [1.0, -1.0] {
            points[(i, col)] = sign * s;
            weights[col] = w_axial;
            col += 1;
        }
    }

    // Paired points (±√3, ±√3) over all coordinate pairs
    for i in 0..n {
        for j in (i + 1)..n {
            for (si, sj) in [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)] {
                points[(i, col)] = si * s;
                points[(j, col)] = sj * s;
                weights[col] = w_pair;
                col += 1;
            }
        }
    }
    debug_assert_eq!(col, num_points);

    (points, weights)
}

/// Degree-5 cubature points and weights for a standard `dim`-variate Gaussian
///
/// # Arguments
/// * `dim` - Dimensionality of the integration domain
///
/// # Returns
/// (points, weights): a dim × (2·dim² + 1) point matrix (one point per
/// column) and the matching weight vector; weights sum to 1
///
/// # Errors
/// `InvalidDimension` if `dim` is 0
pub fn fifth_order_cubature_points(
    dim: usize,
) -> Result<(DMatrix<f64>, DVector<f64>), GeometryError> {
    if dim == 0 {
        return Err(GeometryError::InvalidDimension { dim });
    }
    Ok(fifth_order_rule(dim))
}

/// An immutable set of 3-D cubature points and weights
///
/// Approximates the standard trivariate Gaussian: an affine transform of the
/// points (see [`transform_sigma_points`](crate::cubature::transform_sigma_points))
/// approximates any specific Gaussian. Built once per batch and shared
/// read-only across all measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct CubaturePointSet {
    points: Vec<Vector3<f64>>,
    weights: Vec<f64>,
}

impl CubaturePointSet {
    /// The default degree-5 rule for dimension 3 (19 points)
    pub fn fifth_order() -> Self {
        let (points, weights) = fifth_order_rule(3);
        Self {
            points: points
                .column_iter()
                .map(|c| Vector3::new(c[0], c[1], c[2]))
                .collect(),
            weights: weights.iter().copied().collect(),
        }
    }

    /// Create a point set from caller-supplied points and weights
    ///
    /// Weights should sum to 1; this is the caller's contract and is not
    /// renormalized here.
    ///
    /// # Errors
    /// * `Configuration` if the set is empty
    /// * `ShapeMismatch` if point and weight counts differ
    pub fn new(points: Vec<Vector3<f64>>, weights: Vec<f64>) -> Result<Self, GeometryError> {
        if points.is_empty() {
            return Err(GeometryError::Configuration {
                description: "cubature point set must not be empty".to_string(),
            });
        }
        if points.len() != weights.len() {
            return Err(GeometryError::ShapeMismatch {
                expected: points.len(),
                actual: weights.len(),
                context: "cubature weights".to_string(),
            });
        }
        Ok(Self { points, weights })
    }

    /// Number of cubature points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the set holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points, in rule order
    pub fn points(&self) -> &[Vector3<f64>] {
        &self.points
    }

    /// The weights, aligned with [`points`](Self::points)
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

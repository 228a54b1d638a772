//! Error types for the geometry routines
//!
//! All fallible routines in this crate return [`GeometryError`]. Errors are
//! signaled at the point of use; numerically degenerate but valid inputs
//! (e.g. a singular covariance square root describing a zero-variance
//! dimension) are never treated as errors.

use std::fmt;

/// Errors that can occur in the measurement-geometry routines
#[derive(Debug, Clone)]
pub enum GeometryError {
    /// A cubature rule or distribution was requested for an unusable
    /// dimensionality
    InvalidDimension {
        /// The dimensionality that was requested
        dim: usize,
    },

    /// Array lengths disagree (e.g. covariance count neither 1 nor N, or
    /// point/weight counts differ)
    ShapeMismatch {
        /// What was expected
        expected: usize,
        /// What was received
        actual: usize,
        /// Context (e.g. "covariance square roots", "cubature weights")
        context: String,
    },

    /// A geometric quantity is undefined (e.g. direction cosines of a point
    /// coinciding with the receiver)
    DegenerateGeometry {
        /// Description of the degenerate configuration
        context: String,
    },

    /// A matrix that must be full rank has no Cholesky factor
    SingularMatrix {
        /// Description of which matrix failed
        context: String,
    },

    /// Invalid parameter value (e.g. probability outside (0, 1))
    Configuration {
        /// Description of the configuration issue
        description: String,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidDimension { dim } => {
                write!(f, "Invalid dimensionality: {}", dim)
            }
            GeometryError::ShapeMismatch {
                expected,
                actual,
                context,
            } => {
                write!(
                    f,
                    "Shape mismatch for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            GeometryError::DegenerateGeometry { context } => {
                write!(f, "Degenerate geometry: {}", context)
            }
            GeometryError::SingularMatrix { context } => {
                write!(f, "Matrix factorization failed: {}", context)
            }
            GeometryError::Configuration { description } => {
                write!(f, "Configuration error: {}", description)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_contains_context() {
        let err = GeometryError::ShapeMismatch {
            expected: 5,
            actual: 3,
            context: "covariance square roots".to_string(),
        };
        assert!(err.to_string().contains("5"));
        assert!(err.to_string().contains("3"));
        assert!(err.to_string().contains("covariance square roots"));

        let err = GeometryError::InvalidDimension { dim: 0 };
        assert!(err.to_string().contains("0"));

        let err = GeometryError::DegenerateGeometry {
            context: "zero range".to_string(),
        };
        assert!(err.to_string().contains("zero range"));
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(GeometryError::SingularMatrix {
            context: "grid covariance".to_string(),
        });
        assert!(err.to_string().contains("grid covariance"));
    }
}

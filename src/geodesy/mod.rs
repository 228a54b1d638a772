//! Geodesy primitives
//!
//! Reference-ellipsoid height computation used by the refraction model, and
//! the orthographic tangent-plane projection of spherical coordinates.

pub mod ellipsoid;
pub mod projection;

pub use ellipsoid::{ellipsoid_height, WGS84_FLATTENING, WGS84_SEMI_MAJOR_AXIS};
pub use projection::{orthographic_project, orthographic_unproject};

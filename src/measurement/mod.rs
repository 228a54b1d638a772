//! Refraction-corrupted measurement model
//!
//! Maps Cartesian positions into bistatic range / direction-cosine
//! coordinates under an exponential-atmosphere refraction correction, and
//! provides the second-derivative matrices of those measurement components.

pub mod geometry;
pub mod hessian;
pub mod refraction;
pub mod ruv;

pub use geometry::{AtmosphereModel, MeasurementGeometry};
pub use hessian::{bistatic_range_hessian, uv_hessians};
pub use refraction::{decay_constant_from_refractivity, refraction_range_bias};
pub use ruv::cart_to_ruv;

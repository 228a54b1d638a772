//! Statistical validation of the cubature moments against Monte Carlo
//!
//! Draws a large seeded sample from the input Gaussian, pushes every sample
//! through the nonlinear conversion, and checks that the cubature mean and
//! covariance agree with the sample moments to within sampling error.

use nalgebra::{Matrix3, Rotation3, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use sensorgeom::{cart_to_ruv, CubaturePropagator, MeasurementGeometry};

const NUM_SAMPLES: usize = 200_000;

#[test]
fn cubature_moments_match_monte_carlo() {
    let geometry = MeasurementGeometry::new(
        Vector3::new(-2000.0, 300.0, 0.0),
        Vector3::new(100.0, -50.0, 20.0),
    )
    .with_orientation(Rotation3::from_euler_angles(0.1, -0.2, 0.3).into_inner());

    let mean = Vector3::new(5000.0, 2000.0, 3000.0);
    let cov_sqrt = Matrix3::new(
        10.0, 0.0, 0.0, //
        2.0, 8.0, 0.0, //
        -1.0, 3.0, 6.0,
    );

    let cubature = CubaturePropagator::new(geometry)
        .propagate_single(&mean, &cov_sqrt)
        .unwrap();

    // Seeded sample of the same input Gaussian
    let mut rng = StdRng::seed_from_u64(7);
    let mut mc_mean = Vector3::zeros();
    let mut outputs = Vec::with_capacity(NUM_SAMPLES);
    for _ in 0..NUM_SAMPLES {
        let z = Vector3::new(
            rng.sample::<f64, _>(StandardNormal),
            rng.sample::<f64, _>(StandardNormal),
            rng.sample::<f64, _>(StandardNormal),
        );
        let x = mean + cov_sqrt * z;
        let y = cart_to_ruv(&x, &geometry).unwrap();
        mc_mean += y;
        outputs.push(y);
    }
    mc_mean /= NUM_SAMPLES as f64;

    let mut mc_cov = Matrix3::zeros();
    for y in &outputs {
        let d = y - mc_mean;
        mc_cov += d * d.transpose();
    }
    mc_cov /= (NUM_SAMPLES - 1) as f64;

    // Means: range to within a fraction of its Monte Carlo standard error
    // envelope, direction cosines on their own (much smaller) scale
    assert!((cubature.mean.x - mc_mean.x).abs() < 0.2);
    assert!((cubature.mean.y - mc_mean.y).abs() < 5e-5);
    assert!((cubature.mean.z - mc_mean.z).abs() < 5e-5);

    // Covariances: entrywise, scaled by the corresponding standard
    // deviations so range/direction-cosine cross terms get a fair tolerance
    for i in 0..3 {
        for j in 0..3 {
            let scale = (cubature.covariance[(i, i)] * cubature.covariance[(j, j)]).sqrt();
            let tolerance = 0.05 * scale + 1e-12;
            assert!(
                (cubature.covariance[(i, j)] - mc_cov[(i, j)]).abs() < tolerance,
                "covariance entry ({}, {}) disagrees: cubature {}, monte carlo {}",
                i,
                j,
                cubature.covariance[(i, j)],
                mc_cov[(i, j)]
            );
        }
    }
}

//! End-to-end invariance checks for the descriptor pipeline.
//!
//! The whole point of the symmetry-function transform is that rigid
//! rotations and neighbor reordering leave both the descriptor vector and
//! the reference energy unchanged; these tests exercise that across the
//! full generation path.

use nalgebra::{Rotation3, Vector3};
use rand::prelude::*;

use traingen::geometry::{sample_geometry, NeighborGeometry};
use traingen::potential::{PotentialEnergy, StillingerWeber};
use traingen::symmetry::silicon_set;

fn rotate(geometry: &NeighborGeometry, rotation: &Rotation3<f64>) -> NeighborGeometry {
    NeighborGeometry::new(
        geometry
            .positions()
            .iter()
            .map(|p| rotation * p)
            .collect::<Vec<Vector3<f64>>>(),
    )
}

fn mean_abs(values: &[f64]) -> f64 {
    values.iter().map(|v| v.abs()).sum::<f64>() / values.len() as f64
}

#[test]
fn descriptor_and_energy_survive_fifty_rotations() {
    let sigma = 2.0951;
    let (r_min, r_max) = (0.85 * sigma, 1.8 * sigma - 1e-8);
    let mut rng = StdRng::seed_from_u64(2021);

    let config = silicon_set(sigma);
    let potential = StillingerWeber::default();

    let mut geometry = sample_geometry(&mut rng, r_min, r_max, 8);
    let descriptor_before = config.transform(&geometry);
    let energy_before = potential.energy(&geometry);

    // Apply 50 random rotations in sequence, as one accumulated rigid motion
    for _ in 0..50 {
        let (roll, pitch, yaw) = (
            rng.gen_range(0.0..std::f64::consts::TAU),
            rng.gen_range(0.0..std::f64::consts::TAU),
            rng.gen_range(0.0..std::f64::consts::TAU),
        );
        let rotation = Rotation3::from_euler_angles(roll, pitch, yaw);
        geometry = rotate(&geometry, &rotation);
    }

    let descriptor_after = config.transform(&geometry);
    let energy_after = potential.energy(&geometry);

    let mae_before = mean_abs(&descriptor_before);
    let mae_after = mean_abs(&descriptor_after);
    let drift = (mae_after - mae_before).abs() / mae_before;
    assert!(
        drift < 1e-6,
        "descriptor MAE drifted by {} under rotation",
        drift
    );

    let energy_drift = (energy_after - energy_before).abs() / energy_before.abs().max(1.0);
    assert!(
        energy_drift < 1e-6,
        "energy drifted by {} under rotation",
        energy_drift
    );
}

#[test]
fn descriptor_and_energy_survive_neighbor_reordering() {
    let sigma = 2.0951;
    let (r_min, r_max) = (0.85 * sigma, 1.8 * sigma - 1e-8);
    let mut rng = StdRng::seed_from_u64(77);

    let config = silicon_set(sigma);
    let potential = StillingerWeber::default();

    let geometry = sample_geometry(&mut rng, r_min, r_max, 8);
    let mut positions = geometry.positions().to_vec();
    positions.shuffle(&mut rng);
    let permuted = NeighborGeometry::new(positions);

    let original = config.transform(&geometry);
    let reordered = config.transform(&permuted);
    for (a, b) in original.iter().zip(&reordered) {
        let scale = a.abs().max(1.0);
        assert!(
            (a - b).abs() / scale < 1e-10,
            "descriptor column changed under permutation: {} vs {}",
            a,
            b
        );
    }

    let energy_a = potential.energy(&geometry);
    let energy_b = potential.energy(&permuted);
    assert!((energy_a - energy_b).abs() / energy_a.abs().max(1.0) < 1e-10);
}

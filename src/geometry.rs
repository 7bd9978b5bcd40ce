//! Neighbor-list geometries and the random geometry sampler.
//!
//! A `NeighborGeometry` holds the positions of the neighbors of one central
//! atom, relative to that atom (the central atom sits at the origin and is
//! never stored). One frozen geometry feeds both the reference potential
//! and the symmetry-function transform for a given training sample.

use nalgebra::Vector3;
use rand::prelude::*;
use rand_distr::{Distribution, Uniform};

/// Relative positions of the neighbors of one central atom.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborGeometry {
    positions: Vec<Vector3<f64>>,
}

impl NeighborGeometry {
    pub fn new(positions: Vec<Vector3<f64>>) -> Self {
        NeighborGeometry { positions }
    }

    /// Number of neighbors.
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[Vector3<f64>] {
        &self.positions
    }

    /// Euclidean distance of each neighbor from the central atom.
    pub fn distances(&self) -> Vec<f64> {
        self.positions.iter().map(|p| p.norm()).collect()
    }
}

/// Draw one random neighbor-list geometry.
///
/// Each neighbor is generated independently: a target radius is drawn
/// uniformly in `[r_min, r_max]` and squared, the squared radius is split
/// into three non-negative axis components by two uniform cuts, the axis
/// assignment is shuffled and each sign randomized. The resulting distance
/// from the origin is exactly the drawn radius, so every neighbor lands in
/// the `[r_min, r_max]` band. Angles are an emergent by-product of the
/// axis-split and are not uniform over the sphere.
///
/// The caller must ensure `0 <= r_min <= r_max`.
pub fn sample_geometry<R: Rng>(
    rng: &mut R,
    r_min: f64,
    r_max: f64,
    neighbors: usize,
) -> NeighborGeometry {
    let radius = Uniform::new_inclusive(r_min, r_max);
    let mut positions = Vec::with_capacity(neighbors);

    for _ in 0..neighbors {
        let r2 = radius.sample(rng).powi(2);
        let x2 = rng.gen_range(0.0..=r2);
        let y2 = rng.gen_range(0.0..=(r2 - x2));
        let z2 = r2 - x2 - y2;

        let mut components = [x2, y2, z2];
        components.shuffle(rng);

        let signed = |c2: f64, rng: &mut R| {
            if rng.gen::<bool>() {
                c2.sqrt()
            } else {
                -c2.sqrt()
            }
        };
        let x = signed(components[0], rng);
        let y = signed(components[1], rng);
        let z = signed(components[2], rng);
        positions.push(Vector3::new(x, y, z));
    }

    NeighborGeometry::new(positions)
}

/// Draw `size` independent geometries from the same radial band.
pub fn sample_many<R: Rng>(
    rng: &mut R,
    r_min: f64,
    r_max: f64,
    neighbors: usize,
    size: usize,
) -> Vec<NeighborGeometry> {
    (0..size)
        .map(|_| sample_geometry(rng, r_min, r_max, neighbors))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_neighbor_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let geometry = sample_geometry(&mut rng, 0.9, 1.6, 12);
        assert_eq!(geometry.count(), 12);
        assert_eq!(geometry.distances().len(), 12);
    }

    #[test]
    fn test_sampling_bounds() {
        // Every neighbor distance must land in [r_min, r_max] over many draws
        let mut rng = StdRng::seed_from_u64(42);
        let (r_min, r_max) = (0.85 * 2.0951, 1.8 * 2.0951 - 1e-8);
        for _ in 0..10_000 {
            let geometry = sample_geometry(&mut rng, r_min, r_max, 1);
            let r = geometry.distances()[0];
            assert!(r >= r_min - 1e-12 && r <= r_max + 1e-12, "r = {} out of band", r);
        }
    }

    #[test]
    fn test_radius_matches_drawn_components() {
        let mut rng = StdRng::seed_from_u64(3);
        let geometry = sample_geometry(&mut rng, 1.0, 1.0, 50);
        // Degenerate band: every distance is exactly 1
        for r in geometry.distances() {
            assert_relative_eq!(r, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_same_seed_same_geometry() {
        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        let a = sample_many(&mut rng_a, 0.9, 1.6, 8, 5);
        let b = sample_many(&mut rng_b, 0.9, 1.6, 8, 5);
        assert_eq!(a, b);
    }
}

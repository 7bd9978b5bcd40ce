//! Pairwise Lennard-Jones reference energy.

use crate::geometry::NeighborGeometry;
use crate::potential::PotentialEnergy;

/// Lennard-Jones pair potential in reduced units.
///
/// Inside the cutoff each neighbor contributes the usual 12-6 term plus a
/// constant offset equal to the magnitude of the potential at the cutoff;
/// outside the cutoff the contribution is that constant alone, so the pair
/// term flattens instead of dropping to zero.
#[derive(Debug, Clone)]
pub struct LennardJones {
    pub epsilon: f64,
    pub sigma: f64,
    /// Cutoff radius in units of sigma (default 1.6)
    pub cutoff: f64,
}

impl LennardJones {
    pub fn new(epsilon: f64, sigma: f64, cutoff: f64) -> Self {
        LennardJones {
            epsilon,
            sigma,
            cutoff,
        }
    }

    fn pair_energy(&self, r: f64) -> f64 {
        let inv_r2 = self.sigma * self.sigma / (r * r);
        let inv_r6 = inv_r2 * inv_r2 * inv_r2;
        4.0 * self.epsilon * (inv_r6 * inv_r6 - inv_r6)
    }

    /// Constant per-neighbor offset: |U(r_cut)|.
    pub fn floor(&self) -> f64 {
        self.pair_energy(self.cutoff * self.sigma).abs()
    }

    /// Radial band the sampler should draw from for this model.
    pub fn sampling_band(&self) -> (f64, f64) {
        (0.9 * self.sigma, self.cutoff * self.sigma)
    }
}

impl Default for LennardJones {
    fn default() -> Self {
        LennardJones::new(1.0, 1.0, 1.6)
    }
}

impl PotentialEnergy for LennardJones {
    fn energy(&self, geometry: &NeighborGeometry) -> f64 {
        let r_cut = self.cutoff * self.sigma;
        let floor = self.floor();
        geometry
            .distances()
            .iter()
            .map(|&r| {
                if r < r_cut {
                    self.pair_energy(r) + floor
                } else {
                    floor
                }
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn single_neighbor(r: f64) -> NeighborGeometry {
        NeighborGeometry::new(vec![Vector3::new(r, 0.0, 0.0)])
    }

    #[test]
    fn test_minimum_location() {
        // U(2^(1/6) sigma) = -epsilon for the unshifted pair term
        let lj = LennardJones::default();
        let r_min = 2f64.powf(1.0 / 6.0);
        assert_relative_eq!(lj.pair_energy(r_min), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_contribution_beyond_cutoff_is_floor() {
        let lj = LennardJones::default();
        for r in [1.6, 1.7, 2.5, 10.0] {
            assert_relative_eq!(lj.energy(&single_neighbor(r)), lj.floor(), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_shifted_term_vanishes_at_cutoff() {
        // Just inside the cutoff the pair term cancels the offset to within
        // the local slope times the step
        let lj = LennardJones::default();
        let delta = 1e-6;
        let r = 1.6 - delta;
        let slope = (lj.pair_energy(r) - lj.pair_energy(1.6)).abs() / delta;
        assert!(lj.energy(&single_neighbor(r)).abs() < slope * delta * 2.0);
    }

    #[test]
    fn test_energy_sums_over_neighbors() {
        let lj = LennardJones::default();
        let geometry = NeighborGeometry::new(vec![
            Vector3::new(1.1, 0.0, 0.0),
            Vector3::new(0.0, 1.3, 0.0),
            Vector3::new(0.0, 0.0, 2.0),
        ]);
        let expected = lj.energy(&single_neighbor(1.1))
            + lj.energy(&single_neighbor(1.3))
            + lj.energy(&single_neighbor(2.0));
        assert_relative_eq!(lj.energy(&geometry), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_permutation_invariance() {
        let lj = LennardJones::default();
        let a = NeighborGeometry::new(vec![
            Vector3::new(1.0, 0.2, 0.0),
            Vector3::new(0.0, 1.4, 0.3),
            Vector3::new(0.5, 0.5, 1.0),
        ]);
        let b = NeighborGeometry::new(vec![
            Vector3::new(0.5, 0.5, 1.0),
            Vector3::new(1.0, 0.2, 0.0),
            Vector3::new(0.0, 1.4, 0.3),
        ]);
        assert_relative_eq!(lj.energy(&a), lj.energy(&b), epsilon = 1e-12);
    }
}

//! Stillinger-Weber reference energy (two-body tail + three-body angular term).

use std::sync::atomic::{AtomicU64, Ordering};

use itertools::Itertools;
use tracing::warn;

use crate::geometry::NeighborGeometry;
use crate::potential::PotentialEnergy;

/// Stillinger-Weber model constants.
#[derive(Debug, Clone, Copy)]
pub struct StillingerWeberParams {
    pub a_coeff: f64,
    pub b_coeff: f64,
    pub p: f64,
    pub q: f64,
    /// Cutoff radius in units of sigma
    pub a: f64,
    pub lambda: f64,
    pub gamma: f64,
    /// Well depth in eV
    pub epsilon: f64,
    /// Length scale in Angstrom
    pub sigma: f64,
    /// Cosine of the ideal tetrahedral angle (109.47 deg)
    pub cos_theta0: f64,
}

impl StillingerWeberParams {
    /// Standard silicon parametrization.
    pub fn silicon() -> Self {
        StillingerWeberParams {
            a_coeff: 7.049556277,
            b_coeff: 0.6022245584,
            p: 4.0,
            q: 0.0,
            a: 1.8,
            lambda: 21.0,
            gamma: 1.2,
            epsilon: 2.1683,
            sigma: 2.0951,
            cos_theta0: -1.0 / 3.0,
        }
    }
}

impl Default for StillingerWeberParams {
    fn default() -> Self {
        StillingerWeberParams::silicon()
    }
}

/// Stillinger-Weber evaluator.
///
/// The two-body sum is first computed in one masked pass over all neighbors;
/// the `exp(sigma/(r - a*sigma))` tail overflows for distances just outside
/// the cutoff and the 0-mask then turns the overflow into NaN. When the
/// aggregate comes out non-finite the sum is redone neighbor by neighbor,
/// skipping the individually non-finite terms. The number of times the
/// serial path fired is counted; frequent triggering means the sampling
/// band sits too close to the singular radius `a*sigma`.
#[derive(Debug)]
pub struct StillingerWeber {
    pub params: StillingerWeberParams,
    fallback_hits: AtomicU64,
}

impl StillingerWeber {
    pub fn new(params: StillingerWeberParams) -> Self {
        StillingerWeber {
            params,
            fallback_hits: AtomicU64::new(0),
        }
    }

    /// How many geometries needed the serial two-body fallback so far.
    pub fn fallback_count(&self) -> u64 {
        self.fallback_hits.load(Ordering::Relaxed)
    }

    /// Radial band the sampler should draw from for this model. The upper
    /// bound stays strictly below the singular radius `a*sigma`.
    pub fn sampling_band(&self) -> (f64, f64) {
        let p = &self.params;
        (0.85 * p.sigma, p.a * p.sigma - 1e-8)
    }

    /// Unmasked two-body pair term; only valid inside the cutoff.
    fn pair_term(&self, r: f64) -> f64 {
        let p = &self.params;
        let sr = p.sigma / r;
        p.a_coeff * p.epsilon * (p.b_coeff * sr.powf(p.p) - sr.powf(p.q))
            * (p.sigma / (r - p.a * p.sigma)).exp()
    }

    fn two_body(&self, distances: &[f64]) -> f64 {
        let r_cut = self.params.a * self.params.sigma;

        // Masked pass over all neighbors at once; outside the cutoff the
        // pair term can overflow to inf and 0 * inf propagates as NaN
        let aggregate: f64 = distances
            .iter()
            .map(|&r| {
                let mask = if r < r_cut { 1.0 } else { 0.0 };
                self.pair_term(r) * mask
            })
            .sum();
        if aggregate.is_finite() {
            return aggregate;
        }

        // Serial recovery: evaluate each in-cutoff neighbor on its own and
        // skip exactly-invalid terms instead of propagating NaN
        self.fallback_hits.fetch_add(1, Ordering::Relaxed);
        let serial: f64 = distances
            .iter()
            .filter(|&&r| r < r_cut)
            .map(|&r| self.pair_term(r))
            .filter(|term| term.is_finite())
            .sum();
        warn!(
            aggregate,
            serial, "non-finite two-body aggregate, recomputed serially"
        );
        serial
    }

    fn three_body(&self, geometry: &NeighborGeometry, distances: &[f64]) -> f64 {
        let p = &self.params;
        let r_cut = p.a * p.sigma;
        let positions = geometry.positions();

        let mut total = 0.0;
        for (j, k) in (0..positions.len()).tuple_combinations() {
            let (r_j, r_k) = (distances[j], distances[k]);
            if r_j >= r_cut || r_k >= r_cut {
                continue;
            }
            let cos_theta = positions[j].dot(&positions[k]) / (r_j * r_k);
            let exp_factor = (p.gamma * p.sigma / (r_j - r_cut)).exp()
                * (p.gamma * p.sigma / (r_k - r_cut)).exp();
            let angle_factor = p.lambda * p.epsilon * (cos_theta - p.cos_theta0).powi(2);
            total += exp_factor * angle_factor;
        }
        total
    }
}

impl Default for StillingerWeber {
    fn default() -> Self {
        StillingerWeber::new(StillingerWeberParams::silicon())
    }
}

impl PotentialEnergy for StillingerWeber {
    fn energy(&self, geometry: &NeighborGeometry) -> f64 {
        let distances = geometry.distances();
        self.two_body(&distances) + self.three_body(geometry, &distances)
    }
}

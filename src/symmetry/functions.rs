//! Scalar kernels G1..G5.
//!
//! Each kernel reduces the neighbor list of one atom (distances for the
//! radial functions, full positions for the angular ones) plus its
//! parameters to a single rotation- and permutation-invariant value, per
//! Behler, J. Chem. Phys. 134, 074106 (2011).

use std::f64::consts::PI;

use itertools::Itertools;
use nalgebra::Vector3;

/// Smooth radial cutoff: 1 at the origin, decays to 0 at `rc`, 0 beyond.
pub fn cutoff(r: f64, rc: f64) -> f64 {
    if r <= rc {
        0.5 * ((PI * r / rc).cos() + 1.0)
    } else {
        0.0
    }
}

/// Radial density: sum of the cutoff function over neighbors.
pub fn g1(distances: &[f64], rc: f64) -> f64 {
    distances.iter().map(|&r| cutoff(r, rc)).sum()
}

/// Radial Gaussian centered at `rs` with width `eta`.
pub fn g2(distances: &[f64], rc: f64, rs: f64, eta: f64) -> f64 {
    distances
        .iter()
        .map(|&r| (-eta * (r - rs).powi(2)).exp() * cutoff(r, rc))
        .sum()
}

/// Radial oscillation with wavenumber `kappa`.
pub fn g3(distances: &[f64], rc: f64, kappa: f64) -> f64 {
    distances
        .iter()
        .map(|&r| (kappa * r).cos() * cutoff(r, rc))
        .sum()
}

/// Angular three-body descriptor over all neighbor pairs, including the
/// neighbor-neighbor leg `r_jk` of the triangle.
pub fn g4(positions: &[Vector3<f64>], rc: f64, eta: f64, zeta: f64, lambda: f64) -> f64 {
    let mut total = 0.0;
    for (pj, pk) in positions.iter().tuple_combinations() {
        let (r_j, r_k) = (pj.norm(), pk.norm());
        let r_jk = (pj - pk).norm();
        let cos_theta = pj.dot(pk) / (r_j * r_k);
        total += (1.0 + lambda * cos_theta).powf(zeta)
            * (-eta * (r_j * r_j + r_k * r_k + r_jk * r_jk)).exp()
            * cutoff(r_j, rc)
            * cutoff(r_k, rc)
            * cutoff(r_jk, rc);
    }
    // Each unordered pair appears twice in the j != k double sum
    2.0 * total
}

/// Angular descriptor without the `r_jk` leg; matches potentials whose
/// three-body term depends on the angle only.
pub fn g5(positions: &[Vector3<f64>], rc: f64, eta: f64, zeta: f64, lambda: f64) -> f64 {
    let mut total = 0.0;
    for (pj, pk) in positions.iter().tuple_combinations() {
        let (r_j, r_k) = (pj.norm(), pk.norm());
        let cos_theta = pj.dot(pk) / (r_j * r_k);
        total += (1.0 + lambda * cos_theta).powf(zeta)
            * (-eta * (r_j * r_j + r_k * r_k)).exp()
            * cutoff(r_j, rc)
            * cutoff(r_k, rc);
    }
    2.0 * total
}

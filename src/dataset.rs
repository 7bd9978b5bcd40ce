//! Assembly of (energy, descriptor) training records.

use rand::prelude::*;
use rayon::prelude::*;

use crate::geometry::sample_geometry;
use crate::potential::PotentialEnergy;
use crate::symmetry::DescriptorConfig;

/// One labeled training row: the reference energy followed by the
/// fixed-length descriptor vector.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingRecord {
    pub energy: f64,
    pub descriptor: Vec<f64>,
}

/// Radial band the sampler draws neighbor distances from.
#[derive(Debug, Clone, Copy)]
pub struct RadialBand {
    pub r_min: f64,
    pub r_max: f64,
}

impl RadialBand {
    pub fn new(r_min: f64, r_max: f64) -> Self {
        RadialBand { r_min, r_max }
    }
}

/// Generate `samples` independent training records.
///
/// Each sample owns an RNG stream seeded from the global seed and its index,
/// so a fixed seed reproduces the dataset bit-for-bit regardless of how the
/// work is scheduled across threads. The energy and the descriptor of a
/// record are both computed from the same frozen geometry.
pub fn generate_records<P>(
    potential: &P,
    descriptor: &DescriptorConfig,
    band: RadialBand,
    neighbors: usize,
    samples: usize,
    seed: u64,
) -> Vec<TrainingRecord>
where
    P: PotentialEnergy + Sync,
{
    (0..samples)
        .into_par_iter()
        .map(|index| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
            let geometry = sample_geometry(&mut rng, band.r_min, band.r_max, neighbors);
            TrainingRecord {
                energy: potential.energy(&geometry),
                descriptor: descriptor.transform(&geometry),
            }
        })
        .collect()
}

/// Shuffle rows in place so persisted datasets carry no generation-order
/// correlation into downstream batched training.
pub fn shuffle_records<R: Rng>(records: &mut [TrainingRecord], rng: &mut R) {
    records.shuffle(rng);
}

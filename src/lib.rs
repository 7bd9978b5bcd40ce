// Main library file for training-data generation

pub mod config;
pub mod dataset;
pub mod geometry;
pub mod io;
pub mod potential;
pub mod symmetry;

pub use dataset::{generate_records, shuffle_records, RadialBand, TrainingRecord};
pub use geometry::{sample_geometry, sample_many, NeighborGeometry};
pub use potential::{LennardJones, PotentialEnergy, StillingerWeber};
pub use symmetry::{DescriptorConfig, SymmetryFunction};

//! Behler-Parrinello symmetry functions and the descriptor transform.

pub mod functions;
pub mod presets;
pub mod transform;

pub use functions::cutoff;
pub use presets::{lennard_jones_set, silicon_set};
pub use transform::{DescriptorConfig, SymmetryFunction};

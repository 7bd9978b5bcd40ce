//! Descriptor configuration and the fixed-layout transform.

use serde::{Deserialize, Serialize};

use crate::geometry::NeighborGeometry;
use crate::symmetry::functions;

/// One configured symmetry-function instance. Each variant carries its own
/// parameter record and contributes exactly one descriptor column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family")]
pub enum SymmetryFunction {
    G1 { rc: f64 },
    G2 { rc: f64, rs: f64, eta: f64 },
    G3 { rc: f64, kappa: f64 },
    G4 { rc: f64, eta: f64, zeta: f64, lambda: f64 },
    G5 { rc: f64, eta: f64, zeta: f64, lambda: f64 },
}

impl SymmetryFunction {
    /// Evaluate this function for one neighbor-list geometry.
    pub fn evaluate(&self, geometry: &NeighborGeometry) -> f64 {
        match *self {
            SymmetryFunction::G1 { rc } => functions::g1(&geometry.distances(), rc),
            SymmetryFunction::G2 { rc, rs, eta } => {
                functions::g2(&geometry.distances(), rc, rs, eta)
            }
            SymmetryFunction::G3 { rc, kappa } => functions::g3(&geometry.distances(), rc, kappa),
            SymmetryFunction::G4 {
                rc,
                eta,
                zeta,
                lambda,
            } => functions::g4(geometry.positions(), rc, eta, zeta, lambda),
            SymmetryFunction::G5 {
                rc,
                eta,
                zeta,
                lambda,
            } => functions::g5(geometry.positions(), rc, eta, zeta, lambda),
        }
    }
}

/// An ordered set of symmetry functions. The declaration order defines the
/// column layout of every descriptor vector produced with this config, and
/// must match between dataset generation and later inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptorConfig {
    functions: Vec<SymmetryFunction>,
}

impl DescriptorConfig {
    pub fn new(functions: Vec<SymmetryFunction>) -> Self {
        DescriptorConfig { functions }
    }

    /// Descriptor length: one column per configured function.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn functions(&self) -> &[SymmetryFunction] {
        &self.functions
    }

    /// Map one geometry to its fixed-length descriptor vector.
    pub fn transform(&self, geometry: &NeighborGeometry) -> Vec<f64> {
        // Distances are recomputed inside the radial kernels; hoisting them
        // here would not change any output column
        self.functions
            .iter()
            .map(|f| f.evaluate(geometry))
            .collect()
    }
}

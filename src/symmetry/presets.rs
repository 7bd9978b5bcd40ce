//! Built-in descriptor parameter grids.
//!
//! The grids are built as explicit tables at configuration time; the column
//! order below is the column order of every dataset generated with them.

use crate::symmetry::transform::{DescriptorConfig, SymmetryFunction};

/// Gaussian widths shared by the radial and angular silicon grids.
const SILICON_ETAS: [f64; 10] = [0.0, 0.3, 0.65, 1.25, 2.5, 5.0, 10.0, 20.0, 40.0, 90.0];

/// Sharpness exponents for the angular silicon grid, paired with the
/// alternating lambda sign below.
const SILICON_ZETAS: [f64; 6] = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0];

/// Descriptor set for the Stillinger-Weber silicon data: 10 radial G2
/// columns followed by 120 angular G4 columns (eta varying slowest, then
/// zeta, then lambda in {-1, +1}), 130 columns total.
pub fn silicon_set(sigma: f64) -> DescriptorConfig {
    let rc = 1.8 * sigma;
    let rs = 0.85 * sigma;

    let mut functions = Vec::with_capacity(130);
    for eta in SILICON_ETAS {
        functions.push(SymmetryFunction::G2 { rc, rs, eta });
    }
    for eta in SILICON_ETAS {
        for zeta in SILICON_ZETAS {
            for lambda in [-1.0, 1.0] {
                functions.push(SymmetryFunction::G4 {
                    rc,
                    eta,
                    zeta,
                    lambda,
                });
            }
        }
    }
    DescriptorConfig::new(functions)
}

/// Descriptor set for the Lennard-Jones data: 10 radial G2 columns spanning
/// the sampling band [0.9 sigma, 1.6 sigma].
pub fn lennard_jones_set(sigma: f64) -> DescriptorConfig {
    let rc = 1.6 * sigma;
    let rs = 0.9 * sigma;
    let etas = [0.0, 1.0, 2.5, 5.0, 10.0, 20.0, 40.0, 90.0, 200.0, 500.0];

    let functions = etas
        .into_iter()
        .map(|eta| SymmetryFunction::G2 { rc, rs, eta })
        .collect();
    DescriptorConfig::new(functions)
}

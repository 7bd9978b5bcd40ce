//! Parser for human-authored descriptor-configuration files.
//!
//! Format: a leading comment line, a line with the total function count,
//! then one function per line. Columns may be separated by commas and/or
//! whitespace. Note the files store eta before the cutoff radius:
//!
//! ```text
//! # comment
//! 3
//! G2, 0.01, 6.0, 0.0        # eta, rc, rs
//! G4, 0.003, 6.0, 1, -1     # eta, rc, zeta, lambda
//! G4, 0.003, 6.0, 1, 1
//! ```

use std::fs;
use std::path::Path;

use color_eyre::eyre::{bail, eyre, Result, WrapErr};

use crate::symmetry::{DescriptorConfig, SymmetryFunction};

/// Load a descriptor configuration from a parameter file.
///
/// An unrecognized family tag or a mismatch between the header count and
/// the number of parsed entries is a fatal configuration error.
pub fn load_descriptor_file<P: AsRef<Path>>(path: P) -> Result<DescriptorConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Unable to read descriptor file: {}", path.display()))?;
    let config = parse_descriptor_file(&content)
        .wrap_err_with(|| format!("Malformed descriptor file: {}", path.display()))?;
    Ok(config)
}

fn parse_descriptor_file(content: &str) -> Result<DescriptorConfig> {
    let mut declared: Option<usize> = None;
    let mut functions = Vec::new();

    for (row, line) in content.lines().enumerate() {
        if row == 0 {
            continue;
        }
        let line = line.split('#').next().unwrap_or("").replace(',', " ");
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        if declared.is_none() {
            let count = fields[0]
                .parse::<usize>()
                .wrap_err_with(|| format!("line {}: expected function count", row + 1))?;
            declared = Some(count);
            continue;
        }

        let function = match fields[0] {
            "G2" => {
                let [eta, rc, rs] = parse_values(&fields[1..], row)?;
                SymmetryFunction::G2 { rc, rs, eta }
            }
            "G4" => {
                let [eta, rc, zeta, lambda] = parse_values(&fields[1..], row)?;
                SymmetryFunction::G4 {
                    rc,
                    eta,
                    zeta,
                    lambda,
                }
            }
            "G5" => {
                let [eta, rc, zeta, lambda] = parse_values(&fields[1..], row)?;
                SymmetryFunction::G5 {
                    rc,
                    eta,
                    zeta,
                    lambda,
                }
            }
            tag => bail!("line {}: unrecognized symmetry-function tag '{}'", row + 1, tag),
        };
        functions.push(function);
    }

    let declared = declared.ok_or_else(|| eyre!("missing function-count header"))?;
    if declared != functions.len() {
        bail!(
            "header declares {} symmetry functions but {} were parsed",
            declared,
            functions.len()
        );
    }
    Ok(DescriptorConfig::new(functions))
}

fn parse_values<const N: usize>(fields: &[&str], row: usize) -> Result<[f64; N]> {
    if fields.len() != N {
        bail!(
            "line {}: expected {} parameters, found {}",
            row + 1,
            N,
            fields.len()
        );
    }
    let mut values = [0.0; N];
    for (value, field) in values.iter_mut().zip(fields) {
        *value = field
            .parse::<f64>()
            .wrap_err_with(|| format!("line {}: bad number '{}'", row + 1, field))?;
    }
    Ok(values)
}

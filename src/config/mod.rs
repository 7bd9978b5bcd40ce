//! Run configuration for dataset generation.
//!
//! Loaded from YAML; enum sections are tagged with `type` and every field
//! that has a sensible default can be omitted.

mod args;

pub use args::Args;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::dataset::RadialBand;
use crate::io::load_descriptor_file;
use crate::potential::{LennardJones, Potential, StillingerWeber, StillingerWeberParams};
use crate::symmetry::{lennard_jones_set, silicon_set, DescriptorConfig};

/// Configuration for one generation run
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Reference potential used to label the geometries
    pub potential: PotentialConfig,
    /// Sample count, neighbor count and RNG seeding
    pub sampling: SamplingConfig,
    /// Symmetry-function set defining the descriptor columns
    pub descriptor: DescriptorSource,
    /// Dataset output settings
    pub output: OutputConfig,
}

/// Reference potential configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "type")]
pub enum PotentialConfig {
    /// Lennard-Jones pair potential
    #[serde(rename = "lennard_jones")]
    LennardJones {
        /// Well depth (reduced units)
        #[serde(default = "default_unity")]
        epsilon: f64,
        /// Collision diameter (reduced units)
        #[serde(default = "default_unity")]
        sigma: f64,
        /// Cutoff radius in units of sigma (default: 1.6)
        #[serde(default = "default_lj_cutoff")]
        cutoff: f64,
    },
    /// Stillinger-Weber potential with the silicon constants
    #[serde(rename = "stillinger_weber")]
    StillingerWeber {
        /// Well depth in eV (default: 2.1683)
        #[serde(default = "default_sw_epsilon")]
        epsilon: f64,
        /// Length scale in Angstrom (default: 2.0951)
        #[serde(default = "default_sw_sigma")]
        sigma: f64,
    },
}

/// Sampling configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SamplingConfig {
    /// Number of training records to generate
    pub samples: usize,
    /// Neighbors per geometry
    pub neighbors: usize,
    /// Global RNG seed; drawn from entropy when omitted
    pub seed: Option<u64>,
    /// Lower radial bound override (default: the model's band)
    pub r_min: Option<f64>,
    /// Upper radial bound override (default: the model's band)
    pub r_max: Option<f64>,
}

/// Where the descriptor columns come from
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "type")]
pub enum DescriptorSource {
    /// Built-in silicon grid: 10 G2 + 120 G4 columns
    #[serde(rename = "silicon")]
    Silicon,
    /// Built-in Lennard-Jones grid: 10 G2 columns
    #[serde(rename = "lennard_jones")]
    LennardJones,
    /// Human-authored parameter file (G2/G4/G5 lines with a count header)
    #[serde(rename = "behler_file")]
    BehlerFile { path: String },
}

/// Output configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    /// Dataset filename; versioned fallback names avoid collisions
    pub filename: String,
    /// Concatenate previously generated files with the same prefix
    #[serde(default)]
    pub merge_existing: bool,
    /// Shuffle rows before persistence
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,
}

fn default_unity() -> f64 {
    1.0
}
fn default_lj_cutoff() -> f64 {
    1.6
}
fn default_sw_epsilon() -> f64 {
    2.1683
}
fn default_sw_sigma() -> f64 {
    2.0951
}
fn default_shuffle() -> bool {
    true
}

impl Config {
    /// Load configuration from YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_yml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.sampling.samples == 0 {
            return Err("Sample count must be positive".to_string());
        }

        match &self.potential {
            PotentialConfig::LennardJones {
                epsilon,
                sigma,
                cutoff,
            } => {
                if *epsilon <= 0.0 {
                    return Err("LJ epsilon must be positive".to_string());
                }
                if *sigma <= 0.0 {
                    return Err("LJ sigma must be positive".to_string());
                }
                if *cutoff <= 0.0 {
                    return Err("LJ cutoff must be positive".to_string());
                }
            }
            PotentialConfig::StillingerWeber { epsilon, sigma } => {
                if *epsilon <= 0.0 {
                    return Err("SW epsilon must be positive".to_string());
                }
                if *sigma <= 0.0 {
                    return Err("SW sigma must be positive".to_string());
                }
            }
        }

        let (r_min, r_max) = self.sampling_band();
        if r_min < 0.0 {
            return Err("Radial lower bound must be non-negative".to_string());
        }
        if r_min > r_max {
            return Err(format!(
                "Radial band is inverted: r_min = {} > r_max = {}",
                r_min, r_max
            ));
        }

        if self.output.filename.is_empty() {
            return Err("Output filename must not be empty".to_string());
        }

        Ok(())
    }

    /// Radial sampling band: explicit overrides when given, otherwise the
    /// band the model was fit on (SW keeps strictly below the singular
    /// cutoff radius)
    pub fn sampling_band(&self) -> (f64, f64) {
        let (model_min, model_max) = match &self.potential {
            PotentialConfig::LennardJones { sigma, cutoff, .. } => {
                (0.9 * sigma, cutoff * sigma)
            }
            PotentialConfig::StillingerWeber { sigma, .. } => {
                let params = self.stillinger_weber_params();
                (0.85 * sigma, params.a * sigma - 1e-8)
            }
        };
        (
            self.sampling.r_min.unwrap_or(model_min),
            self.sampling.r_max.unwrap_or(model_max),
        )
    }

    pub fn radial_band(&self) -> RadialBand {
        let (r_min, r_max) = self.sampling_band();
        RadialBand::new(r_min, r_max)
    }

    fn stillinger_weber_params(&self) -> StillingerWeberParams {
        let mut params = StillingerWeberParams::silicon();
        if let PotentialConfig::StillingerWeber { epsilon, sigma } = &self.potential {
            params.epsilon = *epsilon;
            params.sigma = *sigma;
        }
        params
    }

    /// Construct the configured reference model.
    pub fn build_potential(&self) -> Potential {
        match &self.potential {
            PotentialConfig::LennardJones {
                epsilon,
                sigma,
                cutoff,
            } => Potential::LennardJones(LennardJones::new(*epsilon, *sigma, *cutoff)),
            PotentialConfig::StillingerWeber { .. } => {
                Potential::StillingerWeber(StillingerWeber::new(self.stillinger_weber_params()))
            }
        }
    }

    /// Build the descriptor column set. Preset grids scale with the
    /// configured potential's sigma; file-based sets are parsed and
    /// count-checked here.
    pub fn build_descriptor(&self) -> color_eyre::eyre::Result<DescriptorConfig> {
        let sigma = match &self.potential {
            PotentialConfig::LennardJones { sigma, .. } => *sigma,
            PotentialConfig::StillingerWeber { sigma, .. } => *sigma,
        };
        match &self.descriptor {
            DescriptorSource::Silicon => Ok(silicon_set(sigma)),
            DescriptorSource::LennardJones => Ok(lennard_jones_set(sigma)),
            DescriptorSource::BehlerFile { path } => load_descriptor_file(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn create_test_config() -> Config {
        Config {
            potential: PotentialConfig::StillingerWeber {
                epsilon: 2.1683,
                sigma: 2.0951,
            },
            sampling: SamplingConfig {
                samples: 100,
                neighbors: 10,
                seed: Some(42),
                r_min: None,
                r_max: None,
            },
            descriptor: DescriptorSource::Silicon,
            output: OutputConfig {
                filename: "sw_train.txt".to_string(),
                merge_existing: false,
                shuffle: true,
            },
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = create_test_config();
        assert!(config.validate().is_ok());

        config.sampling.samples = 0;
        assert!(config.validate().is_err());
        config.sampling.samples = 100;

        config.sampling.r_min = Some(5.0);
        config.sampling.r_max = Some(1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sw_band_stays_below_singularity() {
        let config = create_test_config();
        let (r_min, r_max) = config.sampling_band();
        assert!(r_min > 0.0);
        assert!(r_max < 1.8 * 2.0951);
    }

    #[test]
    fn test_lj_band_spans_cutoff() {
        let mut config = create_test_config();
        config.potential = PotentialConfig::LennardJones {
            epsilon: 1.0,
            sigma: 1.0,
            cutoff: 1.6,
        };
        assert_eq!(config.sampling_band(), (0.9, 1.6));
    }

    #[test]
    fn test_descriptor_dispatch() {
        let config = create_test_config();
        let descriptor = config.build_descriptor().unwrap();
        assert_eq!(descriptor.len(), 130);
    }

    #[test]
    fn test_yaml_parsing_with_defaults() {
        let yaml = "\
potential:
  type: stillinger_weber
sampling:
  samples: 10
  neighbors: 8
descriptor:
  type: silicon
output:
  filename: sw_train.txt
";
        let config: Config = serde_yml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert!(config.output.shuffle);
        assert!(!config.output.merge_existing);
        match config.potential {
            PotentialConfig::StillingerWeber { epsilon, sigma } => {
                assert_eq!(epsilon, 2.1683);
                assert_eq!(sigma, 2.0951);
            }
            _ => panic!("wrong potential variant"),
        }
    }

    #[test]
    fn test_file_io() {
        let config = create_test_config();
        let temp_file = NamedTempFile::new().unwrap();
        config.to_file(temp_file.path()).unwrap();
        let loaded = Config::from_file(temp_file.path()).unwrap();
        assert!(loaded.validate().is_ok());
    }
}

//! Training-data generation command-line interface
//!
//! Samples random neighbor geometries, labels each with a reference
//! potential energy and transforms it into a symmetry-function descriptor,
//! then persists the shuffled `[energy, g_1..g_M]` rows.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{bail, eyre, Result, WrapErr};
use rand::prelude::*;
use tracing::{info, warn};

use traingen::config::{Args, Config};
use traingen::dataset::{generate_records, shuffle_records, TrainingRecord};
use traingen::io::{
    available_filename, find_existing_datasets, read_rows, setup_output, write_rows,
};
use traingen::symmetry::DescriptorConfig;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    setup_output(args.output.as_ref());

    info!("Reading configuration from: {}", args.config_file);
    let content = fs::read_to_string(&args.config_file)
        .wrap_err_with(|| format!("Unable to read configuration file: {}", args.config_file))?;
    let mut config: Config =
        serde_yml::from_str(&content).wrap_err("Failed to parse configuration file")?;

    // Override with command-line arguments if provided
    if let Some(samples) = args.samples {
        info!("Overriding samples with: {}", samples);
        config.sampling.samples = samples;
    }
    if let Some(neighbors) = args.neighbors {
        info!("Overriding neighbors with: {}", neighbors);
        config.sampling.neighbors = neighbors;
    }
    if let Some(seed) = args.seed {
        info!("Overriding seed with: {}", seed);
        config.sampling.seed = Some(seed);
    }
    if let Some(ref data_file) = args.data_file {
        info!("Overriding output filename with: {}", data_file);
        config.output.filename = data_file.clone();
    }

    config.validate().map_err(|e| eyre!(e))?;

    let seed = config
        .sampling
        .seed
        .unwrap_or_else(|| rand::thread_rng().gen());
    info!("Global RNG seed: {}", seed);

    let descriptor = config.build_descriptor()?;
    let potential = config.build_potential();
    let band = config.radial_band();
    info!(
        "Generating {} samples: potential = {}, neighbors = {}, r in [{:.4}, {:.4}], {} descriptor columns",
        config.sampling.samples,
        potential.name(),
        config.sampling.neighbors,
        band.r_min,
        band.r_max,
        descriptor.len()
    );

    let mut records = generate_records(
        &potential,
        &descriptor,
        band,
        config.sampling.neighbors,
        config.sampling.samples,
        seed,
    );
    info!("Computed {} (energy, descriptor) pairs", records.len());
    if potential.fallback_count() > 0 {
        warn!(
            "Serial two-body fallback fired {} times; the sampling band sits close to the cutoff",
            potential.fallback_count()
        );
    }

    let out_path = PathBuf::from(&config.output.filename);
    let merged_sources = if config.output.merge_existing {
        merge_previous_datasets(&out_path, &descriptor, &mut records)?
    } else {
        Vec::new()
    };

    if config.output.shuffle {
        let mut rng = StdRng::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15);
        shuffle_records(&mut records, &mut rng);
    }

    let target = available_filename(&out_path);
    write_rows(&target, &records)?;
    for source in merged_sources {
        fs::remove_file(&source)
            .wrap_err_with(|| format!("Unable to remove merged file: {}", source.display()))?;
    }
    info!(
        "Wrote {} rows ({} columns each) to {}",
        records.len(),
        descriptor.len() + 1,
        target.display()
    );

    Ok(())
}

/// Concatenate rows from previously generated files sharing the output
/// name's prefix. The source files are returned so the caller can remove
/// them once the combined dataset has been written.
fn merge_previous_datasets(
    out_path: &Path,
    descriptor: &DescriptorConfig,
    records: &mut Vec<TrainingRecord>,
) -> Result<Vec<PathBuf>> {
    let dir = match out_path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => Path::new("."),
    };
    let stem = out_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut sources = Vec::new();
    for path in find_existing_datasets(dir, &stem)? {
        let rows = read_rows(&path)?;
        if let Some(row) = rows.first() {
            if row.descriptor.len() != descriptor.len() {
                bail!(
                    "{}: descriptor length {} does not match the configured {} columns",
                    path.display(),
                    row.descriptor.len(),
                    descriptor.len()
                );
            }
        }
        info!("Merging {} rows from {}", rows.len(), path.display());
        records.extend(rows);
        sources.push(path);
    }
    Ok(sources)
}

//! Command-line argument parsing for dataset generation

use clap::Parser;

/// Training-data generation with YAML configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    pub config_file: String,

    /// Override the number of samples to generate
    #[arg(long)]
    pub samples: Option<usize>,

    /// Override the number of neighbors per geometry
    #[arg(long)]
    pub neighbors: Option<usize>,

    /// Override the global RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the dataset output filename
    #[arg(long)]
    pub data_file: Option<String>,

    /// Write the log to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

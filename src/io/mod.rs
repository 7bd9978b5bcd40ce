//! File formats and logging: descriptor-configuration files, persisted
//! training rows, and tracing setup.

pub mod behler;
pub mod dataset_file;
pub mod output;

pub use behler::load_descriptor_file;
pub use dataset_file::{available_filename, find_existing_datasets, read_rows, write_rows, DatasetBuffer};
pub use output::setup_output;

//! Persistence of training rows and batch loading.
//!
//! One comma-delimited line per record, energy first:
//! `energy,g_1,g_2,...,g_M`.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use color_eyre::eyre::{bail, Result, WrapErr};
use rand::prelude::*;
use tracing::info;

use crate::dataset::TrainingRecord;

/// Write records as comma-delimited rows, energy in column 0.
pub fn write_rows<P: AsRef<Path>>(path: P, records: &[TrainingRecord]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .wrap_err_with(|| format!("Unable to create dataset file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for record in records {
        write!(writer, "{}", record.energy)?;
        for value in &record.descriptor {
            write!(writer, ",{}", value)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read rows written by [`write_rows`]. All rows must share one descriptor
/// length.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Unable to read dataset file: {}", path.display()))?;

    let mut records = Vec::new();
    let mut width: Option<usize> = None;
    for (row, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut values = Vec::new();
        for field in line.split(',') {
            let value: f64 = field.trim().parse().wrap_err_with(|| {
                format!("{}: line {}: bad number '{}'", path.display(), row + 1, field)
            })?;
            values.push(value);
        }
        if values.is_empty() {
            bail!("{}: line {}: empty row", path.display(), row + 1);
        }
        let descriptor_len = values.len() - 1;
        let expected = *width.get_or_insert(descriptor_len);
        if expected != descriptor_len {
            bail!(
                "{}: line {}: descriptor length {} differs from {}",
                path.display(),
                row + 1,
                descriptor_len,
                expected
            );
        }
        records.push(TrainingRecord {
            energy: values[0],
            descriptor: values[1..].to_vec(),
        });
    }
    Ok(records)
}

/// Resolve a filename that does not collide with an existing dataset by
/// appending `_v1`, `_v2`, ... before the extension.
pub fn available_filename<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if !path.exists() {
        return path.to_path_buf();
    }
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let parent = path.parent().unwrap_or_else(|| Path::new(""));

    let mut version = 0;
    loop {
        version += 1;
        let candidate = parent.join(format!("{}_v{}{}", stem, version, extension));
        if !candidate.exists() {
            info!("Dataset name taken, writing to: {}", candidate.display());
            return candidate;
        }
    }
}

/// Previously generated dataset files sharing a name prefix, for merging.
pub fn find_existing_datasets<P: AsRef<Path>>(dir: P, prefix: &str) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut found = Vec::new();
    let entries = fs::read_dir(dir)
        .wrap_err_with(|| format!("Unable to scan dataset directory: {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        if path.is_file() && name.starts_with(prefix) && name.ends_with(".txt") {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

/// In-memory dataset split into a held-out test block and a training block
/// served as sequential batches, reshuffled at every epoch boundary.
#[derive(Debug)]
pub struct DatasetBuffer {
    train: Vec<TrainingRecord>,
    test: Vec<TrainingRecord>,
    index: usize,
    rng: StdRng,
}

impl DatasetBuffer {
    /// Load a row file, optionally shuffling before the test split is taken
    /// off the top.
    pub fn load<P: AsRef<Path>>(
        path: P,
        test_size: usize,
        shuffle_rows: bool,
        seed: u64,
    ) -> Result<Self> {
        let mut records = read_rows(path.as_ref())?;
        if test_size > records.len() {
            bail!(
                "test split of {} rows exceeds dataset of {} rows",
                test_size,
                records.len()
            );
        }
        let mut rng = StdRng::seed_from_u64(seed);
        if shuffle_rows {
            records.shuffle(&mut rng);
        }
        let train = records.split_off(test_size);
        info!(
            "Loaded {} training rows and {} test rows",
            train.len(),
            records.len()
        );
        Ok(DatasetBuffer {
            train,
            test: records,
            index: 0,
            rng,
        })
    }

    pub fn train_len(&self) -> usize {
        self.train.len()
    }

    /// The held-out test block.
    pub fn test_records(&self) -> &[TrainingRecord] {
        &self.test
    }

    /// Next training batch. Returns the rows and whether this request
    /// wrapped around an epoch boundary (reshuffling the training block).
    pub fn next_batch(&mut self, size: usize) -> Result<(Vec<TrainingRecord>, bool)> {
        if size > self.train.len() {
            bail!(
                "batch size {} exceeds training set of {} rows",
                size,
                self.train.len()
            );
        }
        let mut epoch_done = false;
        if self.index + size > self.train.len() {
            self.train.shuffle(&mut self.rng);
            self.index = 0;
            epoch_done = true;
        }
        let batch = self.train[self.index..self.index + size].to_vec();
        self.index += size;
        Ok((batch, epoch_done))
    }
}

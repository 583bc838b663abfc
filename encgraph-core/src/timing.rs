//! Timing log loader.
//!
//! The encode scripts append one row per distorted file to a pipe-delimited
//! log with at least `filename` and `elapsed` columns:
//!
//! ```text
//! filename|elapsed|maxrss
//! a.svt.ivf|12.5|81234
//! b.aom.ivf|9.0|90112
//! ```
//!
//! Extra columns are ignored. A filename that appears more than once keeps
//! the value of its last row.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// One row of the timing log.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimingEntry {
    pub filename: String,
    pub elapsed: f64,
}

/// Elapsed encode time per distorted filename, read-only after loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingTable {
    entries: HashMap<String, f64>,
}

impl TimingTable {
    /// Loads the timing log at `path`.
    pub fn load(path: &Path) -> CoreResult<Self> {
        log::debug!("Loading timing log: {}", path.display());
        let file = File::open(path).map_err(|e| {
            CoreError::PathError(format!(
                "Failed to open timing log '{}': {}",
                path.display(),
                e
            ))
        })?;
        let table = Self::from_reader(file)?;
        log::debug!("Loaded {} timing entries", table.len());
        Ok(table)
    }

    /// Parses a timing log from any reader.
    pub fn from_reader<R: Read>(reader: R) -> CoreResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'|')
            .trim(csv::Trim::All)
            .has_headers(true)
            .from_reader(reader);

        let mut entries = HashMap::new();
        for row in csv_reader.deserialize::<TimingEntry>() {
            let entry = row.map_err(map_csv_error)?;
            if entry.elapsed < 0.0 || !entry.elapsed.is_finite() {
                return Err(CoreError::TimingTableParse(format!(
                    "invalid elapsed time {} for {}",
                    entry.elapsed, entry.filename
                )));
            }
            if let Some(previous) = entries.insert(entry.filename.clone(), entry.elapsed) {
                log::debug!(
                    "Timing log repeats {}; replacing {} with {}",
                    entry.filename,
                    previous,
                    entry.elapsed
                );
            }
        }
        Ok(Self { entries })
    }

    /// Elapsed seconds for `filename`, or 0.0 when the log has no row for it.
    #[must_use]
    pub fn elapsed(&self, filename: &str) -> f64 {
        self.entries.get(filename).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn contains(&self, filename: &str) -> bool {
        self.entries.contains_key(filename)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn map_csv_error(err: csv::Error) -> CoreError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => CoreError::Io(io_err),
        _ => CoreError::TimingTableParse(message),
    }
}

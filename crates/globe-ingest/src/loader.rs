//! File loading with the "empty on failure" boundary.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use globe_model::{DatasetKind, DatasetRows};

use crate::error::{IngestError, Result};
use crate::parse::{IngestReport, Parsed, parse_dataset};

/// Where to read one table from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSource {
    pub kind: DatasetKind,
    pub path: PathBuf,
}

impl DatasetSource {
    pub fn new(kind: DatasetKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}

/// Result of a load attempt. `report` is `None` when the table could not be
/// read at all, in which case `rows` is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDataset {
    pub rows: DatasetRows,
    pub report: Option<IngestReport>,
}

impl LoadedDataset {
    pub fn kind(&self) -> DatasetKind {
        self.rows.kind()
    }

    pub fn failed(kind: DatasetKind) -> Self {
        Self {
            rows: DatasetRows::empty(kind),
            report: None,
        }
    }
}

/// Read and parse a table, surfacing the error.
pub fn read_dataset_file(kind: DatasetKind, path: &Path) -> Result<Parsed<DatasetRows>> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    parse_dataset(kind, BufReader::new(file))
}

/// Read and parse a table. Never fails: errors become an empty row set and
/// a logged diagnostic.
pub fn load_dataset_file(kind: DatasetKind, path: &Path) -> LoadedDataset {
    match read_dataset_file(kind, path) {
        Ok(parsed) => {
            let report = parsed.report;
            tracing::info!(
                dataset = %kind,
                path = %path.display(),
                records = report.records,
                kept = report.kept,
                empty_key = report.dropped_empty_key,
                aggregate = report.dropped_aggregate,
                bad_time = report.dropped_bad_time,
                missing_primary = report.missing_primary,
                malformed = report.malformed,
                "dataset loaded"
            );
            LoadedDataset {
                rows: parsed.rows,
                report: Some(report),
            }
        }
        Err(err @ (IngestError::Io { .. } | IngestError::EmptyInput { .. })) => {
            tracing::warn!(dataset = %kind, path = %path.display(), error = %err, "dataset unavailable, using empty rows");
            LoadedDataset::failed(kind)
        }
        Err(err) => {
            tracing::error!(dataset = %kind, path = %path.display(), error = %err, "dataset unreadable, using empty rows");
            LoadedDataset::failed(kind)
        }
    }
}

pub fn load_dataset(source: &DatasetSource) -> LoadedDataset {
    load_dataset_file(source.kind, &source.path)
}

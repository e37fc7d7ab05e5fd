use std::path::PathBuf;

use globe_model::DatasetKind;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV for {dataset}: {source}")]
    Csv {
        dataset: DatasetKind,
        #[source]
        source: csv::Error,
    },

    #[error("{dataset} table has no column {column}")]
    MissingColumn {
        dataset: DatasetKind,
        column: String,
    },

    #[error("{dataset} table is empty (no header row)")]
    EmptyInput { dataset: DatasetKind },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(dataset: DatasetKind, source: csv::Error) -> Self {
        Self::Csv { dataset, source }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;

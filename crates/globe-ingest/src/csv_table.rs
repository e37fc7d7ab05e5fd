//! Thin layer over the `csv` reader: header capture and cell access.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};

use globe_model::DatasetKind;

use crate::error::{IngestError, Result};
use crate::schema::ColumnLocator;

/// Column names from the first line of a table, normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeader {
    names: Vec<String>,
}

impl CsvHeader {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| normalize_header(n.as_ref()))
                .collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of a column, or `None` when the table lacks it.
    pub fn locate(&self, locator: ColumnLocator) -> Option<usize> {
        match locator {
            ColumnLocator::Name(name) => self.names.iter().position(|h| h == name),
            ColumnLocator::Index(idx) => (idx < self.names.len()).then_some(idx),
        }
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reader that treats the first line as data so the header can be captured
/// explicitly, and that tolerates ragged rows.
pub fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input)
}

pub fn read_header<R: Read>(reader: &mut csv::Reader<R>, kind: DatasetKind) -> Result<CsvHeader> {
    let mut record = StringRecord::new();
    let found = reader
        .read_record(&mut record)
        .map_err(|e| IngestError::csv(kind, e))?;
    if !found || is_blank(&record) {
        return Err(IngestError::EmptyInput { dataset: kind });
    }
    Ok(CsvHeader::new(record.iter()))
}

/// Cell text at `position`; absent columns and short rows read as empty.
pub fn cell(record: &StringRecord, position: Option<usize>) -> &str {
    position.and_then(|idx| record.get(idx)).unwrap_or("")
}

pub fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|value| value.trim().is_empty())
}

//! Ingestion of the four published climate tables.
//!
//! Parsing is strict about table shape (header, required columns) and
//! lenient about content. The loader boundary turns every failure into an
//! empty row set so downstream code only ever sees data or no data.

pub mod aggregates;
pub mod csv_table;
pub mod error;
pub mod loader;
pub mod numeric;
pub mod parse;
pub mod schema;
pub mod worker;

pub use aggregates::{CO2_AGGREGATE_REGIONS, is_aggregate_region};
pub use error::{IngestError, Result};
pub use loader::{DatasetSource, LoadedDataset, load_dataset, load_dataset_file, read_dataset_file};
pub use numeric::parse_f64;
pub use parse::{
    IngestReport, Parsed, parse_co2, parse_dataset, parse_global_temperature, parse_sea_level,
    parse_temperature,
};
pub use schema::{ColumnLocator, ColumnSpec, DatasetSchema, ResolvedColumns};
pub use worker::{IngestEvent, IngestWorker};

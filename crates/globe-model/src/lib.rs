pub mod dataset;
pub mod error;
pub mod rows;
pub mod time;
pub mod value;

pub use dataset::{ActiveDataset, DatasetKind, Granularity};
pub use error::{ModelError, Result};
pub use rows::{
    Co2Row, CountryObservation, DatasetRows, GlobalTemperatureRow, GlobalTemperatureSource,
    SeaLevelRow, TemperatureRow,
};
pub use time::{
    CanonicalDate, DEFAULT_YEAR, DateParts, TimeKey, parse_date_parts, parse_month_key,
    parse_year,
};
pub use value::{Co2Reading, TemperatureReading, ValueMap, ValuePayload};

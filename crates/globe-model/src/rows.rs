//! Typed row records, one shape per dataset kind.
//!
//! Numeric fields that failed to parse are `None`. Rows are immutable once
//! produced by ingestion; a dataset's full row set is held for the session.

use crate::dataset::{DatasetKind, Granularity};
use crate::time::{CanonicalDate, TimeKey};
use crate::value::{Co2Reading, TemperatureReading, ValuePayload};

/// Monthly land temperature for one country.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureRow {
    pub date: CanonicalDate,
    pub country: String,
    pub value: Option<f64>,
    pub uncertainty: Option<f64>,
}

/// Yearly CO₂ emissions for one country. `value` is the per-capita figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Co2Row {
    pub date: CanonicalDate,
    pub country: String,
    pub value: Option<f64>,
    pub co2: Option<f64>,
    pub population: Option<f64>,
    pub gdp: Option<f64>,
    pub energy: Option<f64>,
}

/// Global mean sea level in millimetres relative to the 1993-2008 average.
#[derive(Debug, Clone, PartialEq)]
pub struct SeaLevelRow {
    pub year: i32,
    /// Raw date column as published.
    pub date: String,
    pub mm: f64,
}

/// Which column a global temperature value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalTemperatureSource {
    LandAndOcean,
    Land,
}

/// Global monthly mean temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalTemperatureRow {
    pub date: CanonicalDate,
    pub value: f64,
    pub source: GlobalTemperatureSource,
}

/// A row that contributes one country entry to the value map.
pub trait CountryObservation {
    fn date(&self) -> &CanonicalDate;
    fn country(&self) -> &str;
    /// Primary value; rows without one never reach the value map.
    fn primary(&self) -> Option<f64>;
    /// Payload for a row whose primary value is present.
    fn payload(&self) -> Option<ValuePayload>;
}

impl CountryObservation for TemperatureRow {
    fn date(&self) -> &CanonicalDate {
        &self.date
    }

    fn country(&self) -> &str {
        &self.country
    }

    fn primary(&self) -> Option<f64> {
        self.value.filter(|v| v.is_finite())
    }

    fn payload(&self) -> Option<ValuePayload> {
        let value = self.primary()?;
        Some(ValuePayload::Temperature(TemperatureReading {
            value,
            uncertainty: self.uncertainty,
        }))
    }
}

impl CountryObservation for Co2Row {
    fn date(&self) -> &CanonicalDate {
        &self.date
    }

    fn country(&self) -> &str {
        &self.country
    }

    fn primary(&self) -> Option<f64> {
        self.value.filter(|v| v.is_finite())
    }

    fn payload(&self) -> Option<ValuePayload> {
        let value = self.primary()?;
        Some(ValuePayload::Co2(Co2Reading {
            value,
            co2: self.co2,
            population: self.population,
            gdp: self.gdp,
            energy: self.energy,
        }))
    }
}

/// The full row set of one dataset, discriminated by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetRows {
    Temperature(Vec<TemperatureRow>),
    Co2(Vec<Co2Row>),
    SeaLevel(Vec<SeaLevelRow>),
    GlobalTemperature(Vec<GlobalTemperatureRow>),
}

impl DatasetRows {
    /// An empty row set, the valid "not loaded yet" or "failed to load" state.
    pub fn empty(kind: DatasetKind) -> Self {
        match kind {
            DatasetKind::Temperature => Self::Temperature(Vec::new()),
            DatasetKind::Co2 => Self::Co2(Vec::new()),
            DatasetKind::SeaLevel => Self::SeaLevel(Vec::new()),
            DatasetKind::GlobalTemperature => Self::GlobalTemperature(Vec::new()),
        }
    }

    pub fn kind(&self) -> DatasetKind {
        match self {
            Self::Temperature(_) => DatasetKind::Temperature,
            Self::Co2(_) => DatasetKind::Co2,
            Self::SeaLevel(_) => DatasetKind::SeaLevel,
            Self::GlobalTemperature(_) => DatasetKind::GlobalTemperature,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Temperature(rows) => rows.len(),
            Self::Co2(rows) => rows.len(),
            Self::SeaLevel(rows) => rows.len(),
            Self::GlobalTemperature(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Time keys of every row, unsorted and possibly repeated.
    pub fn time_keys(&self) -> Vec<TimeKey> {
        let granularity: Granularity = self.kind().granularity();
        match self {
            Self::Temperature(rows) => rows
                .iter()
                .filter_map(|r| r.date.time_key(granularity))
                .collect(),
            Self::Co2(rows) => rows
                .iter()
                .filter_map(|r| r.date.time_key(granularity))
                .collect(),
            Self::SeaLevel(rows) => rows.iter().map(|r| TimeKey::year(r.year)).collect(),
            Self::GlobalTemperature(rows) => rows
                .iter()
                .filter_map(|r| r.date.time_key(granularity))
                .collect(),
        }
    }
}

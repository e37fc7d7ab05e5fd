//! Dataset catalogue.
//!
//! Four raw tables are ingested, but only two of them are bound to the
//! per-country map. The other two feed the global trend projections.
//!
//! | kind                 | granularity | per-country |
//! |----------------------|-------------|-------------|
//! | `temperature`        | month       | yes         |
//! | `co2`                | year        | yes         |
//! | `sea_level`          | year        | no          |
//! | `global_temperature` | month       | no          |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Temporal unit of a dataset's time keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// Keys are month indexes, canonical dates are `YYYY-MM-01`.
    Month,
    /// Keys are years, canonical dates are `YYYY-01-01`.
    Year,
}

/// Every raw table the ingestion layer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Temperature,
    Co2,
    SeaLevel,
    GlobalTemperature,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 4] = [
        Self::Temperature,
        Self::Co2,
        Self::SeaLevel,
        Self::GlobalTemperature,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Co2 => "co2",
            Self::SeaLevel => "sea_level",
            Self::GlobalTemperature => "global_temperature",
        }
    }

    pub const fn granularity(self) -> Granularity {
        match self {
            Self::Temperature | Self::GlobalTemperature => Granularity::Month,
            Self::Co2 | Self::SeaLevel => Granularity::Year,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Land temperature by country",
            Self::Co2 => "CO₂ emissions by country",
            Self::SeaLevel => "Global sea level rise",
            Self::GlobalTemperature => "Global average temperature",
        }
    }

    /// The map-bound dataset for this kind, if any.
    pub const fn active(self) -> Option<ActiveDataset> {
        match self {
            Self::Temperature => Some(ActiveDataset::Temperature),
            Self::Co2 => Some(ActiveDataset::Co2),
            Self::SeaLevel | Self::GlobalTemperature => None,
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Dataset selectable for the per-country value map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveDataset {
    #[default]
    Temperature,
    Co2,
}

impl ActiveDataset {
    pub const ALL: [ActiveDataset; 2] = [Self::Temperature, Self::Co2];

    pub const fn key(self) -> &'static str {
        self.kind().key()
    }

    pub const fn kind(self) -> DatasetKind {
        match self {
            Self::Temperature => DatasetKind::Temperature,
            Self::Co2 => DatasetKind::Co2,
        }
    }

    pub const fn granularity(self) -> Granularity {
        self.kind().granularity()
    }

    /// Display label for dataset pickers.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature (°C)",
            Self::Co2 => "CO₂ per capita (t)",
        }
    }

    /// Hint shown next to the date input.
    pub const fn snapping_hint(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature snaps to the closest available month.",
            Self::Co2 => "CO₂ snaps to the closest available year.",
        }
    }

    /// Lenient lookup used for UI-provided keys: anything unknown is temperature.
    pub fn from_key_or_default(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }
}

impl FromStr for ActiveDataset {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "temperature" => Ok(Self::Temperature),
            "co2" => Ok(Self::Co2),
            other => Err(ModelError::UnknownDataset {
                key: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ActiveDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl From<ActiveDataset> for DatasetKind {
    fn from(active: ActiveDataset) -> Self {
        active.kind()
    }
}

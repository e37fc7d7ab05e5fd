//! Column layouts of the four published tables.
//!
//! Each schema maps a role to the way its column is located in the header.
//! A missing required column fails the parse; a missing optional column
//! leaves that field missing on every row.

use globe_model::DatasetKind;

use crate::csv_table::CsvHeader;
use crate::error::{IngestError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLocator {
    /// Match the normalized header text exactly.
    Name(&'static str),
    /// Fixed position, bypassing header text.
    Index(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub role: &'static str,
    pub locator: ColumnLocator,
    pub required: bool,
}

impl ColumnSpec {
    const fn required(role: &'static str, locator: ColumnLocator) -> Self {
        Self {
            role,
            locator,
            required: true,
        }
    }

    const fn optional(role: &'static str, locator: ColumnLocator) -> Self {
        Self {
            role,
            locator,
            required: false,
        }
    }
}

pub mod roles {
    pub const DATE: &str = "date";
    pub const YEAR: &str = "year";
    pub const COUNTRY: &str = "country";
    pub const VALUE: &str = "value";
    pub const UNCERTAINTY: &str = "uncertainty";
    pub const POPULATION: &str = "population";
    pub const GDP: &str = "gdp";
    pub const ENERGY: &str = "energy";
    pub const CO2_TOTAL: &str = "co2";
    pub const LAND: &str = "land";
    pub const LAND_AND_OCEAN: &str = "land_and_ocean";
}

/// Position of the `Country` column in `GlobalLandTemperaturesByCountry.csv`.
///
/// The country column is pinned by index instead of matched by name. The
/// published file's `Country` header carries a stray control character
/// (a carriage return left over from its line endings), so whether a name
/// lookup succeeds depends on how the line was split. The other columns of
/// that file are located by name as usual.
pub const TEMPERATURE_COUNTRY_COLUMN: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct DatasetSchema {
    pub kind: DatasetKind,
    pub columns: &'static [ColumnSpec],
}

pub const TEMPERATURE_SCHEMA: DatasetSchema = DatasetSchema {
    kind: DatasetKind::Temperature,
    columns: &[
        ColumnSpec::required(roles::DATE, ColumnLocator::Name("dt")),
        ColumnSpec::required(
            roles::COUNTRY,
            ColumnLocator::Index(TEMPERATURE_COUNTRY_COLUMN),
        ),
        ColumnSpec::optional(roles::VALUE, ColumnLocator::Name("AverageTemperature")),
        ColumnSpec::optional(
            roles::UNCERTAINTY,
            ColumnLocator::Name("AverageTemperatureUncertainty"),
        ),
    ],
};

pub const CO2_SCHEMA: DatasetSchema = DatasetSchema {
    kind: DatasetKind::Co2,
    columns: &[
        ColumnSpec::required(roles::YEAR, ColumnLocator::Name("year")),
        ColumnSpec::required(roles::COUNTRY, ColumnLocator::Name("country")),
        ColumnSpec::optional(roles::VALUE, ColumnLocator::Name("co2_per_capita")),
        ColumnSpec::optional(roles::POPULATION, ColumnLocator::Name("population")),
        ColumnSpec::optional(roles::GDP, ColumnLocator::Name("gdp")),
        ColumnSpec::optional(
            roles::ENERGY,
            ColumnLocator::Name("primary_energy_consumption"),
        ),
        ColumnSpec::optional(roles::CO2_TOTAL, ColumnLocator::Name("co2")),
    ],
};

pub const SEA_LEVEL_SCHEMA: DatasetSchema = DatasetSchema {
    kind: DatasetKind::SeaLevel,
    columns: &[
        ColumnSpec::required(roles::YEAR, ColumnLocator::Name("year")),
        ColumnSpec::optional(roles::DATE, ColumnLocator::Name("date")),
        ColumnSpec::required(roles::VALUE, ColumnLocator::Name("mmfrom1993-2008average")),
    ],
};

pub const GLOBAL_TEMPERATURE_SCHEMA: DatasetSchema = DatasetSchema {
    kind: DatasetKind::GlobalTemperature,
    columns: &[
        ColumnSpec::required(roles::DATE, ColumnLocator::Name("dt")),
        ColumnSpec::optional(roles::LAND, ColumnLocator::Name("LandAverageTemperature")),
        ColumnSpec::optional(
            roles::LAND_AND_OCEAN,
            ColumnLocator::Name("LandAndOceanAverageTemperature"),
        ),
    ],
};

impl DatasetSchema {
    pub fn for_kind(kind: DatasetKind) -> &'static DatasetSchema {
        match kind {
            DatasetKind::Temperature => &TEMPERATURE_SCHEMA,
            DatasetKind::Co2 => &CO2_SCHEMA,
            DatasetKind::SeaLevel => &SEA_LEVEL_SCHEMA,
            DatasetKind::GlobalTemperature => &GLOBAL_TEMPERATURE_SCHEMA,
        }
    }

    /// Locate every column of this schema in `header`.
    pub fn resolve(&self, header: &CsvHeader) -> Result<ResolvedColumns> {
        let mut positions = Vec::with_capacity(self.columns.len());
        for spec in self.columns {
            let position = header.locate(spec.locator);
            if position.is_none() {
                let column = match spec.locator {
                    ColumnLocator::Name(name) => name.to_string(),
                    ColumnLocator::Index(idx) => format!("#{idx} ({})", spec.role),
                };
                if spec.required {
                    return Err(IngestError::MissingColumn {
                        dataset: self.kind,
                        column,
                    });
                }
                tracing::warn!(
                    dataset = %self.kind,
                    column = %column,
                    "optional column absent, field will be missing on every row"
                );
            }
            positions.push((spec.role, position));
        }
        Ok(ResolvedColumns { positions })
    }
}

/// Column positions by role for one table.
#[derive(Debug, Clone)]
pub struct ResolvedColumns {
    positions: Vec<(&'static str, Option<usize>)>,
}

impl ResolvedColumns {
    pub fn position(&self, role: &str) -> Option<usize> {
        self.positions
            .iter()
            .find(|(r, _)| *r == role)
            .and_then(|(_, pos)| *pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_country_is_positional() {
        let header = CsvHeader::new([
            "dt",
            "AverageTemperature",
            "AverageTemperatureUncertainty",
            "\u{1}Country",
        ]);
        let cols = TEMPERATURE_SCHEMA.resolve(&header).expect("resolve");
        assert_eq!(cols.position(roles::COUNTRY), Some(3));
        assert_eq!(cols.position(roles::VALUE), Some(1));
    }

    #[test]
    fn missing_required_column_fails() {
        let header = CsvHeader::new(["country", "co2_per_capita"]);
        let err = CO2_SCHEMA.resolve(&header).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingColumn { ref column, .. } if column == "year"
        ));
    }

    #[test]
    fn missing_optional_column_resolves_to_none() {
        let header = CsvHeader::new(["year", "country"]);
        let cols = CO2_SCHEMA.resolve(&header).expect("resolve");
        assert_eq!(cols.position(roles::GDP), None);
        assert_eq!(cols.position(roles::COUNTRY), Some(1));
    }
}

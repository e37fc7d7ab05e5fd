//! Per-dataset table parsers.
//!
//! Each parser streams records from a CSV reader, applies the dataset's
//! filtering policy and returns typed rows with an [`IngestReport`]. Data
//! gaps are counted, never raised; only a missing header or a missing
//! required column fails the parse.

use std::io::Read;

use csv::StringRecord;
use serde::Serialize;

use globe_model::{
    CanonicalDate, Co2Row, DatasetKind, DatasetRows, GlobalTemperatureRow,
    GlobalTemperatureSource, Granularity, SeaLevelRow, TemperatureRow, parse_year,
};

use crate::aggregates::is_aggregate_region;
use crate::csv_table::{cell, csv_reader, is_blank, read_header};
use crate::error::{IngestError, Result};
use crate::numeric::parse_f64;
use crate::schema::{DatasetSchema, ResolvedColumns, roles};

/// What happened to the records of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub kind: DatasetKind,
    /// Data records read (header and blank lines excluded).
    pub records: usize,
    pub kept: usize,
    pub dropped_empty_key: usize,
    pub dropped_aggregate: usize,
    pub dropped_bad_time: usize,
    /// Rows without a primary value. Country tables keep these rows;
    /// the global tables drop them.
    pub missing_primary: usize,
    /// Records the CSV reader could not decode.
    pub malformed: usize,
}

impl IngestReport {
    pub fn new(kind: DatasetKind) -> Self {
        Self {
            kind,
            records: 0,
            kept: 0,
            dropped_empty_key: 0,
            dropped_aggregate: 0,
            dropped_bad_time: 0,
            missing_primary: 0,
            malformed: 0,
        }
    }

    pub fn dropped(&self) -> usize {
        self.records - self.kept
    }
}

/// Rows of one table plus the report describing how they were filtered.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub rows: T,
    pub report: IngestReport,
}

impl<T> Parsed<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        Parsed {
            rows: f(self.rows),
            report: self.report,
        }
    }
}

/// Parse any of the four tables into its row variant.
pub fn parse_dataset<R: Read>(kind: DatasetKind, input: R) -> Result<Parsed<DatasetRows>> {
    Ok(match kind {
        DatasetKind::Temperature => parse_temperature(input)?.map(DatasetRows::Temperature),
        DatasetKind::Co2 => parse_co2(input)?.map(DatasetRows::Co2),
        DatasetKind::SeaLevel => parse_sea_level(input)?.map(DatasetRows::SeaLevel),
        DatasetKind::GlobalTemperature => {
            parse_global_temperature(input)?.map(DatasetRows::GlobalTemperature)
        }
    })
}

/// `GlobalLandTemperaturesByCountry.csv`: monthly rows per country.
pub fn parse_temperature<R: Read>(input: R) -> Result<Parsed<Vec<TemperatureRow>>> {
    let mut rows = Vec::new();
    let report = for_each_record(input, DatasetKind::Temperature, |record, cols, report| {
        let country = cell(record, cols.position(roles::COUNTRY)).trim();
        if country.is_empty() {
            report.dropped_empty_key += 1;
            return;
        }
        let Some(date) = month_date(cell(record, cols.position(roles::DATE))) else {
            report.dropped_bad_time += 1;
            return;
        };
        let value = parse_f64(cell(record, cols.position(roles::VALUE)));
        if value.is_none() {
            report.missing_primary += 1;
        }
        rows.push(TemperatureRow {
            date,
            country: country.to_string(),
            value,
            uncertainty: parse_f64(cell(record, cols.position(roles::UNCERTAINTY))),
        });
        report.kept += 1;
    })?;
    Ok(Parsed { rows, report })
}

/// OWID CO₂ table: yearly rows per country, aggregate regions removed.
pub fn parse_co2<R: Read>(input: R) -> Result<Parsed<Vec<Co2Row>>> {
    let mut rows = Vec::new();
    let report = for_each_record(input, DatasetKind::Co2, |record, cols, report| {
        let country = cell(record, cols.position(roles::COUNTRY)).trim();
        let year = cell(record, cols.position(roles::YEAR)).trim();
        if country.is_empty() || year.is_empty() {
            report.dropped_empty_key += 1;
            return;
        }
        if is_aggregate_region(country) {
            report.dropped_aggregate += 1;
            return;
        }
        let Some(date) = CanonicalDate::parse(year, Granularity::Year) else {
            report.dropped_bad_time += 1;
            return;
        };
        let value = parse_f64(cell(record, cols.position(roles::VALUE)));
        if value.is_none() {
            report.missing_primary += 1;
        }
        let field = |role: &str| parse_f64(cell(record, cols.position(role)));
        rows.push(Co2Row {
            date,
            country: country.to_string(),
            value,
            co2: field(roles::CO2_TOTAL),
            population: field(roles::POPULATION),
            gdp: field(roles::GDP),
            energy: field(roles::ENERGY),
        });
        report.kept += 1;
    })?;
    Ok(Parsed { rows, report })
}

/// Global sea level by year, sorted by year (stable for repeated years).
pub fn parse_sea_level<R: Read>(input: R) -> Result<Parsed<Vec<SeaLevelRow>>> {
    let mut rows = Vec::new();
    let report = for_each_record(input, DatasetKind::SeaLevel, |record, cols, report| {
        let year_cell = cell(record, cols.position(roles::YEAR)).trim();
        if year_cell.is_empty() {
            report.dropped_empty_key += 1;
            return;
        }
        let Some(year) = year_cell.parse::<i32>().ok().or_else(|| parse_year(year_cell)) else {
            report.dropped_bad_time += 1;
            return;
        };
        let Some(mm) = parse_f64(cell(record, cols.position(roles::VALUE))) else {
            report.missing_primary += 1;
            return;
        };
        rows.push(SeaLevelRow {
            year,
            date: cell(record, cols.position(roles::DATE)).trim().to_string(),
            mm,
        });
        report.kept += 1;
    })?;
    rows.sort_by_key(|row| row.year);
    Ok(Parsed { rows, report })
}

/// Global monthly temperature, preferring the land+ocean series.
pub fn parse_global_temperature<R: Read>(input: R) -> Result<Parsed<Vec<GlobalTemperatureRow>>> {
    let mut rows = Vec::new();
    let report = for_each_record(
        input,
        DatasetKind::GlobalTemperature,
        |record, cols, report| {
            let Some(date) = month_date(cell(record, cols.position(roles::DATE))) else {
                report.dropped_bad_time += 1;
                return;
            };
            let land_and_ocean = parse_f64(cell(record, cols.position(roles::LAND_AND_OCEAN)));
            let land = parse_f64(cell(record, cols.position(roles::LAND)));
            let (value, source) = match (land_and_ocean, land) {
                (Some(v), _) => (v, GlobalTemperatureSource::LandAndOcean),
                (None, Some(v)) => (v, GlobalTemperatureSource::Land),
                (None, None) => {
                    report.missing_primary += 1;
                    return;
                }
            };
            rows.push(GlobalTemperatureRow {
                date,
                value,
                source,
            });
            report.kept += 1;
        },
    )?;
    rows.sort_by(|a, b| a.date.cmp(&b.date));
    Ok(Parsed { rows, report })
}

/// The `dt` column is `YYYY-MM-DD`, sometimes with a time suffix; only the
/// first ten characters are significant.
fn month_date(raw: &str) -> Option<CanonicalDate> {
    let raw = raw.trim();
    let date = raw.get(..10).unwrap_or(raw);
    CanonicalDate::parse(date, Granularity::Month)
}

fn for_each_record<R, F>(input: R, kind: DatasetKind, mut each: F) -> Result<IngestReport>
where
    R: Read,
    F: FnMut(&StringRecord, &ResolvedColumns, &mut IngestReport),
{
    let mut reader = csv_reader(input);
    let header = read_header(&mut reader, kind)?;
    let columns = DatasetSchema::for_kind(kind).resolve(&header)?;

    let mut report = IngestReport::new(kind);
    let mut record = StringRecord::new();
    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) if err.is_io_error() => return Err(IngestError::csv(kind, err)),
            Err(err) => {
                tracing::trace!(dataset = %kind, error = %err, "skipping malformed record");
                report.records += 1;
                report.malformed += 1;
                continue;
            }
        }
        if is_blank(&record) {
            continue;
        }
        report.records += 1;
        each(&record, &columns, &mut report);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dt_with_time_suffix_is_canonicalized() {
        assert_eq!(month_date("1850-06-15T00:00:00").unwrap(), "1850-06-01");
        assert_eq!(month_date(" 1850-06-15 ").unwrap(), "1850-06-01");
        assert!(month_date("June 1850").is_none());
        assert!(month_date("").is_none());
    }

    #[test]
    fn report_counts_drops() {
        let mut report = IngestReport::new(DatasetKind::Co2);
        report.records = 5;
        report.kept = 2;
        assert_eq!(report.dropped(), 3);
    }
}

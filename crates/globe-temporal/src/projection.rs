//! Global scalar lookups for sea level and global mean temperature.

use std::collections::HashMap;

use globe_model::{
    CanonicalDate, GlobalTemperatureRow, Granularity, SeaLevelRow, TimeKey, parse_month_key,
    parse_year,
};

use crate::index::{FallbackDomain, TemporalIndex};
use crate::sparkline::{Sparkline, SparklineFrame};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeaLevelReading {
    pub year: i32,
    pub mm: f64,
}

/// Sea level rows sorted by year.
#[derive(Debug, Clone, Default)]
pub struct SeaLevelSeries {
    rows: Vec<SeaLevelRow>,
    by_year: HashMap<i32, f64>,
}

impl SeaLevelSeries {
    pub fn new(mut rows: Vec<SeaLevelRow>) -> Self {
        rows.sort_by_key(|row| row.year);
        // Repeated years resolve to the last row.
        let by_year = rows.iter().map(|row| (row.year, row.mm)).collect();
        Self { rows, by_year }
    }

    pub fn rows(&self) -> &[SeaLevelRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn bounds(&self) -> Option<(i32, i32)> {
        Some((self.rows.first()?.year, self.rows.last()?.year))
    }

    /// Reading for the year of `date`: the clamped year itself when present,
    /// otherwise the nearest available year (earliest on ties).
    pub fn at(&self, date: &str) -> Option<SeaLevelReading> {
        let (min, max) = self.bounds()?;
        let year = parse_year(date)?.clamp(min, max);
        if let Some(&mm) = self.by_year.get(&year) {
            return Some(SeaLevelReading { year, mm });
        }
        let mut best = self.rows.first()?.year;
        let distance = |row_year: i32| (i64::from(row_year) - i64::from(year)).abs();
        let mut best_dist = distance(best);
        for row in &self.rows {
            let dist = distance(row.year);
            if dist < best_dist {
                best = row.year;
                best_dist = dist;
            }
        }
        let mm = *self.by_year.get(&best)?;
        Some(SeaLevelReading { year: best, mm })
    }

    pub fn sparkline(&self, selected: Option<SeaLevelReading>, cap: usize) -> Option<Sparkline> {
        let series: Vec<(i32, f64)> = self.rows.iter().map(|row| (row.year, row.mm)).collect();
        Sparkline::build(
            &series,
            cap,
            selected.map(|reading| reading.year),
            SparklineFrame::default(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlobalTemperatureReading {
    pub date: CanonicalDate,
    pub value: f64,
}

/// Global monthly temperature rows sorted by date.
#[derive(Debug, Clone)]
pub struct GlobalTemperatureSeries {
    rows: Vec<GlobalTemperatureRow>,
    index: TemporalIndex,
    by_date: HashMap<CanonicalDate, f64>,
}

impl Default for GlobalTemperatureSeries {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl GlobalTemperatureSeries {
    pub fn new(mut rows: Vec<GlobalTemperatureRow>) -> Self {
        rows.sort_by(|a, b| a.date.cmp(&b.date));
        let index = TemporalIndex::with_fallback(
            Granularity::Month,
            rows.iter().filter_map(|row| row.date.time_key(Granularity::Month)),
            FallbackDomain::default(),
        );
        let by_date = rows.iter().map(|row| (row.date.clone(), row.value)).collect();
        Self {
            rows,
            index,
            by_date,
        }
    }

    pub fn rows(&self) -> &[GlobalTemperatureRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reading at `date` exactly, otherwise at the next available month
    /// (the last month when `date` is past the end).
    pub fn at(&self, date: &str) -> Option<GlobalTemperatureReading> {
        if self.rows.is_empty() {
            return None;
        }
        let target = parse_month_key(date)?;
        let key = if self.index.contains_date(date) {
            target
        } else {
            self.index.ceiling(target)
        };
        let date = self.index.date_for(key);
        let value = *self.by_date.get(&date)?;
        Some(GlobalTemperatureReading { date, value })
    }

    pub fn sparkline(
        &self,
        selected: Option<&GlobalTemperatureReading>,
        cap: usize,
    ) -> Option<Sparkline> {
        let series: Vec<(i32, f64)> = self
            .rows
            .iter()
            .map(|row| {
                let key = row
                    .date
                    .time_key(Granularity::Month)
                    .map_or(i32::MIN, TimeKey::get);
                (key, row.value)
            })
            .collect();
        let selected = selected
            .and_then(|reading| reading.date.time_key(Granularity::Month))
            .map(TimeKey::get);
        Sparkline::build(&series, cap, selected, SparklineFrame::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use globe_model::GlobalTemperatureSource;

    fn sea(rows: &[(i32, f64)]) -> SeaLevelSeries {
        SeaLevelSeries::new(
            rows.iter()
                .map(|&(year, mm)| SeaLevelRow {
                    year,
                    date: format!("{year}-03-15"),
                    mm,
                })
                .collect(),
        )
    }

    #[test]
    fn sea_level_exact_and_nearest() {
        let series = sea(&[(1990, 1.0), (1993, 2.0), (2000, 3.0)]);
        assert_eq!(series.at("1993-06-01").map(|r| r.mm), Some(2.0));
        // 1991 is one year from 1990 and two from 1993.
        assert_eq!(series.at("1991-01-01").map(|r| r.year), Some(1990));
        assert_eq!(series.at("1997-01-01").map(|r| r.year), Some(2000));
        assert_eq!(series.at("1850-01-01").map(|r| r.year), Some(1990));
        assert_eq!(series.at("2100-01-01").map(|r| r.year), Some(2000));
        assert_eq!(series.at("not a date"), None);
    }

    #[test]
    fn sea_level_tie_prefers_earlier_year() {
        let series = sea(&[(1990, 1.0), (1994, 2.0)]);
        assert_eq!(series.at("1992-01-01").map(|r| r.year), Some(1990));
    }

    #[test]
    fn sea_level_nearest_handles_extreme_years() {
        let series = sea(&[(i32::MIN, 0.5), (2000, 3.0)]);
        let reading = series.at("1999-01-01").expect("reading");
        assert_eq!(reading.year, 2000);
        assert_eq!(reading.mm, 3.0);
    }

    #[test]
    fn sea_level_duplicate_year_last_wins() {
        let series = sea(&[(1990, 1.0), (1990, 4.0)]);
        assert_eq!(series.at("1990-01-01").map(|r| r.mm), Some(4.0));
    }

    #[test]
    fn empty_series_have_no_readings() {
        assert_eq!(SeaLevelSeries::default().at("1990-01-01"), None);
        assert_eq!(GlobalTemperatureSeries::default().at("1990-01-01"), None);
        assert!(SeaLevelSeries::default().sparkline(None, 60).is_none());
    }

    #[test]
    fn global_temperature_ceiling() {
        let row = |date: &str, value| GlobalTemperatureRow {
            date: CanonicalDate::parse(date, Granularity::Month).unwrap(),
            value,
            source: GlobalTemperatureSource::LandAndOcean,
        };
        let series = GlobalTemperatureSeries::new(vec![
            row("1850-03-01", 13.0),
            row("1850-01-01", 12.0),
        ]);
        let at = |d| series.at(d).map(|r| (r.date.to_string(), r.value));
        assert_eq!(at("1850-01-01"), Some(("1850-01-01".into(), 12.0)));
        assert_eq!(at("1850-02-01"), Some(("1850-03-01".into(), 13.0)));
        assert_eq!(at("1700-01-01"), Some(("1850-01-01".into(), 12.0)));
        assert_eq!(at("2000-01-01"), Some(("1850-03-01".into(), 13.0)));
        assert_eq!(at("??"), None);
    }
}

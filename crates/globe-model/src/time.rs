//! Time keys and canonical date strings.
//!
//! A [`TimeKey`] is the sortable integer form of a dataset's temporal unit:
//! - month granularity: `year * 12 + (month - 1)`, so `key / 12` is the year
//! - year granularity: the year itself
//!
//! A [`CanonicalDate`] is the string form handed to consumers
//! (`YYYY-MM-01` or `YYYY-01-01`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::Granularity;

/// Year assumed when a raw date carries no parseable year.
pub const DEFAULT_YEAR: i32 = 1900;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeKey(i32);

impl TimeKey {
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> i32 {
        self.0
    }

    /// Month key for a 1-based calendar month.
    pub const fn month(year: i32, month: u32) -> Self {
        Self(year * 12 + (month as i32 - 1))
    }

    pub const fn year(year: i32) -> Self {
        Self(year)
    }

    /// The key one unit later (one month or one year, depending on granularity).
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Clamp into `[min, max]`. Never panics when `min > max`; `max` wins.
    pub fn clamp_to(self, min: TimeKey, max: TimeKey) -> Self {
        self.max(min).min(max)
    }

    /// Calendar `(year, month)` for this key.
    pub const fn calendar(self, granularity: Granularity) -> (i32, u32) {
        match granularity {
            Granularity::Month => (
                self.0.div_euclid(12),
                self.0.rem_euclid(12) as u32 + 1,
            ),
            Granularity::Year => (self.0, 1),
        }
    }

    pub fn to_date(self, granularity: Granularity) -> CanonicalDate {
        CanonicalDate::from_key(self, granularity)
    }

    /// Parse a raw date string into a key of the given granularity.
    pub fn parse(raw: &str, granularity: Granularity) -> Option<Self> {
        match granularity {
            Granularity::Month => parse_month_key(raw),
            Granularity::Year => parse_year(raw).map(Self::year),
        }
    }
}

impl fmt::Display for TimeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `YYYY-MM-DD` string with the day (and for yearly data, the month) pinned to `01`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalDate(String);

impl CanonicalDate {
    pub fn from_key(key: TimeKey, granularity: Granularity) -> Self {
        let (year, month) = key.calendar(granularity);
        Self(format!("{year:04}-{month:02}-01"))
    }

    /// Canonicalize a raw date to the given granularity.
    pub fn parse(raw: &str, granularity: Granularity) -> Option<Self> {
        TimeKey::parse(raw, granularity).map(|key| Self::from_key(key, granularity))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn time_key(&self, granularity: Granularity) -> Option<TimeKey> {
        TimeKey::parse(&self.0, granularity)
    }

    pub fn year(&self) -> Option<i32> {
        parse_year(&self.0)
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalDate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CanonicalDate {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CanonicalDate {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Calendar parts read from a raw `YYYY[-MM[-DD]]` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    /// `None` when the month is absent or outside `1..=12`.
    pub month: Option<u32>,
}

/// Read the year from the first four characters and the month from characters 5..7.
///
/// Anything after the month (day, time, timezone) is ignored, so
/// `1850-06-15T00:00` and `1850-06` both yield June 1850.
pub fn parse_date_parts(raw: &str) -> Option<DateParts> {
    let trimmed = raw.trim();
    let year_str = trimmed.get(0..4)?;
    if !year_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = year_str.parse::<i32>().ok()?;
    let month = trimmed
        .get(5..7)
        .filter(|m| m.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|m| m.parse::<u32>().ok())
        .filter(|m| (1..=12).contains(m));
    Some(DateParts { year, month })
}

pub fn parse_year(raw: &str) -> Option<i32> {
    parse_date_parts(raw).map(|parts| parts.year)
}

pub fn parse_month_key(raw: &str) -> Option<TimeKey> {
    let parts = parse_date_parts(raw)?;
    parts.month.map(|month| TimeKey::month(parts.year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_key_round_trips_through_calendar() {
        let key = TimeKey::month(1900, 2);
        assert_eq!(key.get(), 1900 * 12 + 1);
        assert_eq!(key.calendar(Granularity::Month), (1900, 2));
        assert_eq!(key.to_date(Granularity::Month), "1900-02-01");
    }

    #[test]
    fn december_stays_in_its_year() {
        let key = TimeKey::month(1999, 12);
        assert_eq!(key.to_date(Granularity::Month), "1999-12-01");
        assert_eq!(key.next().to_date(Granularity::Month), "2000-01-01");
    }

    #[test]
    fn yearly_dates_pin_month_and_day() {
        assert_eq!(TimeKey::year(1850).to_date(Granularity::Year), "1850-01-01");
        assert_eq!(
            CanonicalDate::parse("1850-06-15", Granularity::Year).unwrap(),
            "1850-01-01"
        );
    }

    #[test]
    fn partial_and_malformed_dates() {
        assert_eq!(
            parse_date_parts("1850-06-15"),
            Some(DateParts {
                year: 1850,
                month: Some(6)
            })
        );
        assert_eq!(
            parse_date_parts("1850"),
            Some(DateParts {
                year: 1850,
                month: None
            })
        );
        assert_eq!(parse_month_key("1850-13-01"), None);
        assert_eq!(parse_year("18a0-01-01"), None);
        assert_eq!(parse_year(""), None);
    }

    #[test]
    fn clamp_tolerates_inverted_bounds() {
        let key = TimeKey::new(5);
        assert_eq!(key.clamp_to(TimeKey::new(0), TimeKey::new(3)), TimeKey::new(3));
        assert_eq!(key.clamp_to(TimeKey::new(9), TimeKey::new(3)), TimeKey::new(3));
    }
}

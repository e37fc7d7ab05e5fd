//! Snapping a requested date onto a dataset's time domain.
//!
//! Year data is clamped into its bounds and nothing more. Month data keeps
//! an exact indexed date as-is; anything else is clamped and then rounded
//! up to the next available month.

use globe_model::{
    ActiveDataset, CanonicalDate, DEFAULT_YEAR, Granularity, TimeKey, parse_month_key, parse_year,
};

use crate::index::TemporalIndex;

/// Canonical committed date for `raw` under `dataset`'s snapping policy.
///
/// `index` must be the temporal index of `dataset`. Unparseable input
/// is read as the default year (January for month data).
pub fn normalize(raw: &str, dataset: ActiveDataset, index: &TemporalIndex) -> CanonicalDate {
    match dataset.granularity() {
        Granularity::Year => {
            let year = parse_year(raw).unwrap_or(DEFAULT_YEAR);
            index.date_for(index.clamp(TimeKey::year(year)))
        }
        Granularity::Month => {
            let parsed = parse_month_key(raw);
            if let Some(key) = parsed.filter(|_| index.contains_date(raw)) {
                return index.date_for(key);
            }
            let target = parsed.unwrap_or(TimeKey::month(DEFAULT_YEAR, 1));
            index.date_for(index.ceiling(index.clamp(target)))
        }
    }
}

/// Both map-bound indexes, so callers can normalize without picking one.
#[derive(Debug, Clone, Copy)]
pub struct DateNormalizer<'a> {
    pub temperature: &'a TemporalIndex,
    pub co2: &'a TemporalIndex,
}

impl<'a> DateNormalizer<'a> {
    pub fn new(temperature: &'a TemporalIndex, co2: &'a TemporalIndex) -> Self {
        Self { temperature, co2 }
    }

    pub fn index_for(&self, dataset: ActiveDataset) -> &'a TemporalIndex {
        match dataset {
            ActiveDataset::Temperature => self.temperature,
            ActiveDataset::Co2 => self.co2,
        }
    }

    pub fn normalize(&self, raw: &str, dataset: ActiveDataset) -> CanonicalDate {
        normalize(raw, dataset, self.index_for(dataset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::FallbackDomain;

    fn fallback() -> FallbackDomain {
        FallbackDomain::fixed(1800, 2026, 10)
    }

    #[test]
    fn co2_clamps_year_only() {
        let index = TemporalIndex::with_fallback(
            Granularity::Year,
            [1850, 1900, 2020].map(TimeKey::year),
            fallback(),
        );
        assert_eq!(normalize("1850-06-15", ActiveDataset::Co2, &index), "1850-01-01");
        assert_eq!(normalize("1875-03-01", ActiveDataset::Co2, &index), "1875-01-01");
        assert_eq!(normalize("1700-01-01", ActiveDataset::Co2, &index), "1850-01-01");
        assert_eq!(normalize("2099-12-01", ActiveDataset::Co2, &index), "2020-01-01");
        assert_eq!(normalize("", ActiveDataset::Co2, &index), "1900-01-01");
    }

    #[test]
    fn temperature_exact_match_is_identity() {
        let index = TemporalIndex::with_fallback(
            Granularity::Month,
            [TimeKey::month(1900, 2), TimeKey::month(1900, 5)],
            fallback(),
        );
        assert_eq!(
            normalize("1900-02-01", ActiveDataset::Temperature, &index),
            "1900-02-01"
        );
        assert_eq!(
            normalize("1900-03-01", ActiveDataset::Temperature, &index),
            "1900-05-01"
        );
        assert_eq!(
            normalize("1900-02-20", ActiveDataset::Temperature, &index),
            "1900-02-01"
        );
        assert_eq!(
            normalize("1750-01-01", ActiveDataset::Temperature, &index),
            "1900-02-01"
        );
        assert_eq!(
            normalize("2001-01-01", ActiveDataset::Temperature, &index),
            "1900-05-01"
        );
    }

    #[test]
    fn unparseable_temperature_date_defaults_to_january_1900() {
        let index = TemporalIndex::empty(Granularity::Month, fallback());
        assert_eq!(
            normalize("soon", ActiveDataset::Temperature, &index),
            "1900-01-01"
        );
        assert_eq!(
            normalize("1700-04-01", ActiveDataset::Temperature, &index),
            "1800-01-01"
        );
    }

    #[test]
    fn normalizer_routes_each_dataset_to_its_own_index() {
        let temperature = TemporalIndex::with_fallback(
            Granularity::Month,
            [TimeKey::month(1900, 2), TimeKey::month(1900, 5)],
            fallback(),
        );
        let co2 = TemporalIndex::with_fallback(
            Granularity::Year,
            [1850, 2020].map(TimeKey::year),
            fallback(),
        );
        let normalizer = DateNormalizer::new(&temperature, &co2);

        assert!(std::ptr::eq(
            normalizer.index_for(ActiveDataset::Temperature),
            &temperature
        ));
        assert!(std::ptr::eq(normalizer.index_for(ActiveDataset::Co2), &co2));
        assert_eq!(
            normalizer.normalize("1900-03-01", ActiveDataset::Temperature),
            "1900-05-01"
        );
        assert_eq!(
            normalizer.normalize("1900-03-01", ActiveDataset::Co2),
            "1900-01-01"
        );
    }
}

//! Sorted, deduplicated time keys of one dataset.

use chrono::{Datelike, Utc};

use globe_model::{CanonicalDate, DatasetRows, Granularity, TimeKey};

/// Earliest year of the domain used while a dataset has no rows.
pub const DEFAULT_EARLIEST_YEAR: i32 = 1800;

/// Domain reported by an empty index: January of `earliest_year` through
/// `latest` (year, month).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackDomain {
    pub earliest_year: i32,
    pub latest: (i32, u32),
}

impl FallbackDomain {
    /// From `earliest_year` up to the current UTC month.
    pub fn through_today(earliest_year: i32) -> Self {
        let today = Utc::now().date_naive();
        Self {
            earliest_year,
            latest: (today.year(), today.month()),
        }
    }

    pub fn fixed(earliest_year: i32, latest_year: i32, latest_month: u32) -> Self {
        Self {
            earliest_year,
            latest: (latest_year, latest_month.clamp(1, 12)),
        }
    }

    pub fn bounds(&self, granularity: Granularity) -> (TimeKey, TimeKey) {
        let (year, month) = self.latest;
        match granularity {
            Granularity::Month => (TimeKey::month(self.earliest_year, 1), TimeKey::month(year, month)),
            Granularity::Year => (TimeKey::year(self.earliest_year), TimeKey::year(year)),
        }
    }
}

impl Default for FallbackDomain {
    fn default() -> Self {
        Self::through_today(DEFAULT_EARLIEST_YEAR)
    }
}

/// Strictly increasing time keys of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporalIndex {
    granularity: Granularity,
    keys: Vec<TimeKey>,
    fallback: FallbackDomain,
}

impl TemporalIndex {
    pub fn build(granularity: Granularity, keys: impl IntoIterator<Item = TimeKey>) -> Self {
        Self::with_fallback(granularity, keys, FallbackDomain::default())
    }

    pub fn with_fallback(
        granularity: Granularity,
        keys: impl IntoIterator<Item = TimeKey>,
        fallback: FallbackDomain,
    ) -> Self {
        let mut keys: Vec<TimeKey> = keys.into_iter().collect();
        keys.sort_unstable();
        keys.dedup();
        tracing::debug!(?granularity, keys = keys.len(), "temporal index built");
        Self {
            granularity,
            keys,
            fallback,
        }
    }

    pub fn empty(granularity: Granularity, fallback: FallbackDomain) -> Self {
        Self {
            granularity,
            keys: Vec::new(),
            fallback,
        }
    }

    pub fn from_rows(rows: &DatasetRows, fallback: FallbackDomain) -> Self {
        Self::with_fallback(rows.kind().granularity(), rows.time_keys(), fallback)
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn keys(&self) -> &[TimeKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn fallback(&self) -> FallbackDomain {
        self.fallback
    }

    /// `(min, max)` of the indexed keys, or the fallback domain when empty.
    pub fn bounds(&self) -> (TimeKey, TimeKey) {
        match (self.keys.first(), self.keys.last()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => self.fallback.bounds(self.granularity),
        }
    }

    pub fn clamp(&self, key: TimeKey) -> TimeKey {
        let (min, max) = self.bounds();
        key.clamp_to(min, max)
    }

    /// Smallest indexed key `>= target`, or the maximum key when `target` is
    /// past the end. An empty index returns `target` unchanged.
    pub fn ceiling(&self, target: TimeKey) -> TimeKey {
        let Some(&last) = self.keys.last() else {
            return target;
        };
        let idx = self.keys.partition_point(|key| *key < target);
        self.keys.get(idx).copied().unwrap_or(last)
    }

    pub fn contains(&self, key: TimeKey) -> bool {
        self.keys.binary_search(&key).is_ok()
    }

    /// Whether `raw` is, character for character, one of the indexed dates.
    pub fn contains_date(&self, raw: &str) -> bool {
        match TimeKey::parse(raw, self.granularity) {
            Some(key) => self.contains(key) && self.date_for(key) == raw,
            None => false,
        }
    }

    pub fn date_for(&self, key: TimeKey) -> CanonicalDate {
        key.to_date(self.granularity)
    }
}

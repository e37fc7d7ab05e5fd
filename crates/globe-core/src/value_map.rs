//! Per-country value map construction.

use globe_model::{CanonicalDate, CountryObservation, ValueMap};
use globe_names::NameMap;

/// Rows dated `committed` with a primary value, keyed by canonical label.
///
/// When two native labels resolve to the same canonical label, the later
/// row in input order wins.
pub fn build_value_map<R: CountryObservation>(
    rows: &[R],
    committed: &CanonicalDate,
    names: &NameMap,
) -> ValueMap {
    let mut map = ValueMap::new();
    let mut collisions = 0usize;
    for row in rows.iter().filter(|row| row.date() == committed) {
        let Some(payload) = row.payload() else {
            continue;
        };
        let label = names.resolve(row.country());
        if map.insert(label.to_string(), payload).is_some() {
            collisions += 1;
            tracing::trace!(label, native = row.country(), "value map label overwritten");
        }
    }
    tracing::debug!(date = %committed, entries = map.len(), collisions, "value map built");
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use globe_model::{Granularity, TemperatureRow};

    fn row(date: &str, country: &str, value: Option<f64>) -> TemperatureRow {
        TemperatureRow {
            date: CanonicalDate::parse(date, Granularity::Month).unwrap(),
            country: country.to_string(),
            value,
            uncertainty: None,
        }
    }

    #[test]
    fn filters_date_and_missing_values() {
        let rows = vec![
            row("1900-02-01", "Chad", Some(28.0)),
            row("1900-03-01", "Chad", Some(29.0)),
            row("1900-02-01", "Mali", None),
            row("1900-02-01", "Niger", Some(f64::NAN)),
        ];
        let date = CanonicalDate::parse("1900-02-01", Granularity::Month).unwrap();
        let map = build_value_map(&rows, &date, &NameMap::new());
        assert_eq!(map.len(), 1);
        assert_eq!(map.value("Chad"), Some(28.0));
    }

    #[test]
    fn colliding_labels_keep_the_last_row() {
        let names = NameMap::from_pairs([("Congo (Kinshasa)", "Congo"), ("Republic of the Congo", "Congo")]);
        let rows = vec![
            row("1900-02-01", "Congo (Kinshasa)", Some(24.0)),
            row("1900-02-01", "Republic of the Congo", Some(25.3)),
        ];
        let date = CanonicalDate::parse("1900-02-01", Granularity::Month).unwrap();
        let map = build_value_map(&rows, &date, &names);
        assert_eq!(map.len(), 1);
        assert_eq!(map.value("Congo"), Some(25.3));
    }
}

//! Property tests for the commit gate, value map and playback stepper.

use globe_core::{CommitGate, PlaybackStepper, Tick, build_value_map};
use globe_model::{ActiveDataset, CanonicalDate, Granularity, TemperatureRow, TimeKey};
use globe_names::NameMap;
use proptest::prelude::*;

fn value() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        Just(Some(f64::NAN)),
        Just(Some(f64::INFINITY)),
        (-50.0f64..50.0).prop_map(Some),
    ]
}

proptest! {
    #[test]
    fn value_map_never_holds_missing_values(
        rows in prop::collection::vec((0u32..3, "[A-E]", value()), 0..40),
    ) {
        let rows: Vec<TemperatureRow> = rows
            .into_iter()
            .map(|(month, country, value)| TemperatureRow {
                date: TimeKey::month(1900, month + 1).to_date(Granularity::Month),
                country,
                value,
                uncertainty: None,
            })
            .collect();
        let date = CanonicalDate::from_key(TimeKey::month(1900, 1), Granularity::Month);
        let map = build_value_map(&rows, &date, &NameMap::new());
        for (_, payload) in map.iter() {
            prop_assert!(payload.value().is_finite());
        }
    }

    #[test]
    fn repeated_commit_is_admitted_once(year in 1800i32..2100, co2 in any::<bool>()) {
        let dataset = if co2 { ActiveDataset::Co2 } else { ActiveDataset::Temperature };
        let date = TimeKey::year(year).to_date(Granularity::Year);
        let mut gate = CommitGate::default();
        prop_assert!(gate.admit(dataset, &date));
        prop_assert!(!gate.admit(dataset, &date));
    }

    #[test]
    fn playback_never_passes_the_maximum(
        min in 0i32..100,
        span in 0i32..50,
        start in prop::option::of(-20i32..200),
    ) {
        let (min, max) = (TimeKey::new(min), TimeKey::new(min + span));
        let mut stepper = PlaybackStepper::default();
        stepper.start(start.map(TimeKey::new), (min, max));
        let mut finished = false;
        for _ in 0..=(span + 1) {
            match stepper.tick() {
                Tick::Advanced(cursor) => prop_assert!(min <= cursor && cursor <= max),
                Tick::Finished => {
                    finished = true;
                    break;
                }
                Tick::Idle => prop_assert!(false, "idle before finishing"),
            }
        }
        prop_assert!(finished);
        prop_assert!(!stepper.is_playing());
    }
}

//! The per-country value map handed to the renderer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemperatureReading {
    pub value: f64,
    pub uncertainty: Option<f64>,
}

/// CO₂ payload. `value` is tonnes per capita; the auxiliary fields feed the
/// Kaya-identity tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Co2Reading {
    pub value: f64,
    pub co2: Option<f64>,
    pub population: Option<f64>,
    pub gdp: Option<f64>,
    pub energy: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValuePayload {
    Temperature(TemperatureReading),
    Co2(Co2Reading),
}

impl ValuePayload {
    pub fn value(&self) -> f64 {
        match self {
            Self::Temperature(reading) => reading.value,
            Self::Co2(reading) => reading.value,
        }
    }
}

/// Canonical country label -> payload.
///
/// Rebuilt wholesale on every (dataset, date) change, never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueMap {
    entries: BTreeMap<String, ValuePayload>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert, replacing any earlier entry under the same label.
    /// Returns the replaced payload.
    pub fn insert(&mut self, label: String, payload: ValuePayload) -> Option<ValuePayload> {
        self.entries.insert(label, payload)
    }

    pub fn get(&self, label: &str) -> Option<&ValuePayload> {
        self.entries.get(label)
    }

    pub fn value(&self, label: &str) -> Option<f64> {
        self.get(label).map(ValuePayload::value)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValuePayload)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_json_is_flat() {
        let mut map = ValueMap::new();
        map.insert(
            "Congo".to_string(),
            ValuePayload::Temperature(TemperatureReading {
                value: 25.3,
                uncertainty: None,
            }),
        );
        let json = serde_json::to_value(&map).expect("serialize map");
        assert_eq!(json["Congo"]["value"], 25.3);
    }

    #[test]
    fn untagged_payloads_deserialize_to_the_right_variant() {
        let co2: ValuePayload = serde_json::from_str(
            r#"{"value":1.5,"co2":10.0,"population":null,"gdp":null,"energy":null}"#,
        )
        .expect("co2 payload");
        assert!(matches!(co2, ValuePayload::Co2(_)));

        let temp: ValuePayload =
            serde_json::from_str(r#"{"value":3.0,"uncertainty":0.2}"#).expect("temp payload");
        assert!(matches!(temp, ValuePayload::Temperature(_)));
    }

    #[test]
    fn insert_overwrites_same_label() {
        let mut map = ValueMap::new();
        let reading = |value| {
            ValuePayload::Temperature(TemperatureReading {
                value,
                uncertainty: None,
            })
        };
        assert!(map.insert("Finland".to_string(), reading(1.0)).is_none());
        assert!(map.insert("Finland".to_string(), reading(2.0)).is_some());
        assert_eq!(map.value("Finland"), Some(2.0));
        assert_eq!(map.len(), 1);
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use globe_model::ActiveDataset;

use crate::map::NameMap;
use crate::tables::{CO2_OVERRIDES, TEMPERATURE_OVERRIDES};

/// User-supplied overrides layered over the curated tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameOverrides {
    pub temperature: BTreeMap<String, String>,
    pub co2: BTreeMap<String, String>,
}

impl NameOverrides {
    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty() && self.co2.is_empty()
    }
}

/// One name map per per-country dataset.
///
/// The same native label may need different canonical labels depending on
/// the source, so the maps are never merged.
#[derive(Debug, Clone)]
pub struct NameReconciler {
    temperature: NameMap,
    co2: NameMap,
}

impl NameReconciler {
    /// Reconciler seeded from the curated tables only.
    pub fn curated() -> Self {
        Self {
            temperature: NameMap::from_pairs(TEMPERATURE_OVERRIDES.iter().copied()),
            co2: NameMap::from_pairs(CO2_OVERRIDES.iter().copied()),
        }
    }

    /// Curated tables plus user overrides.
    pub fn with_overrides(overrides: &NameOverrides) -> Self {
        let mut reconciler = Self::curated();
        if !overrides.is_empty() {
            tracing::debug!(
                temperature = overrides.temperature.len(),
                co2 = overrides.co2.len(),
                "applying country name overrides"
            );
        }
        reconciler
            .temperature
            .extend(overrides.temperature.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        reconciler
            .co2
            .extend(overrides.co2.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        reconciler
    }

    pub fn map_for(&self, dataset: ActiveDataset) -> &NameMap {
        match dataset {
            ActiveDataset::Temperature => &self.temperature,
            ActiveDataset::Co2 => &self.co2,
        }
    }

    /// Canonical label for `native` in `dataset`; identity when unmapped.
    pub fn resolve<'a>(&'a self, dataset: ActiveDataset, native: &'a str) -> &'a str {
        self.map_for(dataset).resolve(native)
    }
}

impl Default for NameReconciler {
    fn default() -> Self {
        Self::curated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_differ_per_dataset() {
        let names = NameReconciler::curated();
        assert_eq!(
            names.resolve(ActiveDataset::Co2, "North Macedonia"),
            "Macedonia"
        );
        assert_eq!(
            names.resolve(ActiveDataset::Temperature, "North Macedonia"),
            "North Macedonia"
        );
    }

    #[test]
    fn overrides_replace_curated_entries() {
        let mut overrides = NameOverrides::default();
        overrides
            .temperature
            .insert("Czech Republic".to_string(), "Czech Rep.".to_string());
        let names = NameReconciler::with_overrides(&overrides);
        assert_eq!(
            names.resolve(ActiveDataset::Temperature, "Czech Republic"),
            "Czech Rep."
        );
        assert_eq!(names.resolve(ActiveDataset::Co2, "Czech Republic"), "Czechia");
    }
}

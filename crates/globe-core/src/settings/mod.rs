//! Session settings, persisted as TOML.
//!
//! Every section has defaults, so a partial file (or none) is valid:
//! - `[datasets]` paths of the four raw tables
//! - `[session]` initial dataset and date
//! - `[playback]` tick cadence and catch-up limit
//! - `[timeline]` empty-index fallback and sparkline sample caps
//! - `[names]` extra country name overrides
//! - `[logging]` subscriber configuration

mod persistence;

pub use persistence::{load_settings, save_settings, settings_path, try_load_settings};

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use globe_ingest::DatasetSource;
use globe_model::{ActiveDataset, DatasetKind};
use globe_names::NameOverrides;
use globe_temporal::{DEFAULT_EARLIEST_YEAR, GLOBAL_TEMPERATURE_SPARK_POINTS, SEA_LEVEL_SPARK_POINTS};

use crate::logging::LogConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub datasets: DatasetPaths,
    pub session: SessionSettings,
    pub playback: PlaybackSettings,
    pub timeline: TimelineSettings,
    pub names: NameOverrides,
    pub logging: LogConfig,
}

/// Locations of the raw tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetPaths {
    pub temperature: PathBuf,
    pub co2: PathBuf,
    pub sea_level: PathBuf,
    pub global_temperature: PathBuf,
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            temperature: PathBuf::from("data/GlobalLandTemperaturesByCountry.csv"),
            co2: PathBuf::from("data/owid-co2-data.csv"),
            sea_level: PathBuf::from("data/sea_levels_2015.csv"),
            global_temperature: PathBuf::from("data/GlobalTemperatures.csv"),
        }
    }
}

impl DatasetPaths {
    pub fn path_for(&self, kind: DatasetKind) -> &PathBuf {
        match kind {
            DatasetKind::Temperature => &self.temperature,
            DatasetKind::Co2 => &self.co2,
            DatasetKind::SeaLevel => &self.sea_level,
            DatasetKind::GlobalTemperature => &self.global_temperature,
        }
    }

    pub fn sources(&self) -> Vec<DatasetSource> {
        DatasetKind::ALL
            .into_iter()
            .map(|kind| DatasetSource::new(kind, self.path_for(kind).clone()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Dataset key; unknown keys select temperature.
    pub dataset: String,
    pub date: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            dataset: ActiveDataset::default().key().to_string(),
            date: "1900-01-01".to_string(),
        }
    }
}

impl SessionSettings {
    pub fn active_dataset(&self) -> ActiveDataset {
        ActiveDataset::from_key_or_default(&self.dataset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    pub temperature_tick_ms: u64,
    pub co2_tick_ms: u64,
    /// Most ticks a single pump may run after the host stalled.
    pub max_catch_up: u32,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            temperature_tick_ms: 120,
            co2_tick_ms: 200,
            max_catch_up: 4,
        }
    }
}

impl PlaybackSettings {
    pub fn cadence(&self, dataset: ActiveDataset) -> Duration {
        let ms = match dataset {
            ActiveDataset::Temperature => self.temperature_tick_ms,
            ActiveDataset::Co2 => self.co2_tick_ms,
        };
        Duration::from_millis(ms.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineSettings {
    pub fallback_earliest_year: i32,
    pub sea_level_spark_points: usize,
    pub global_temperature_spark_points: usize,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            fallback_earliest_year: DEFAULT_EARLIEST_YEAR,
            sea_level_spark_points: SEA_LEVEL_SPARK_POINTS,
            global_temperature_spark_points: GLOBAL_TEMPERATURE_SPARK_POINTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [session]
            dataset = "co2"

            [names.co2]
            "Côte d'Ivoire" = "Côte d'Ivoire"
            "#,
        )
        .unwrap();
        assert_eq!(settings.session.active_dataset(), ActiveDataset::Co2);
        assert_eq!(settings.session.date, "1900-01-01");
        assert_eq!(settings.playback, PlaybackSettings::default());
        assert_eq!(settings.names.co2.len(), 1);
    }

    #[test]
    fn cadence_differs_per_dataset() {
        let playback = PlaybackSettings::default();
        assert_eq!(
            playback.cadence(ActiveDataset::Temperature),
            Duration::from_millis(120)
        );
        assert_eq!(playback.cadence(ActiveDataset::Co2), Duration::from_millis(200));
    }

    #[test]
    fn sources_cover_all_tables() {
        let sources = DatasetPaths::default().sources();
        let kinds: Vec<_> = sources.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, DatasetKind::ALL.to_vec());
    }
}

//! Time resolution for the climate globe.
//!
//! [`TemporalIndex`] holds the sorted time keys of one dataset;
//! [`normalize`] snaps a requested date onto it; the projection types answer
//! "what is the global value at this date" for the two global series.

pub mod index;
pub mod normalize;
pub mod projection;
pub mod sparkline;

pub use index::{DEFAULT_EARLIEST_YEAR, FallbackDomain, TemporalIndex};
pub use normalize::{DateNormalizer, normalize};
pub use projection::{
    GlobalTemperatureReading, GlobalTemperatureSeries, SeaLevelReading, SeaLevelSeries,
};
pub use sparkline::{
    GLOBAL_TEMPERATURE_SPARK_POINTS, SEA_LEVEL_SPARK_POINTS, Sparkline, SparklineFrame,
    sample_indices,
};

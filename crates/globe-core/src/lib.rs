//! Selection, commit, playback and binding for the climate globe.
//!
//! Hosts create a [`Session`], feed it rows (directly or through the
//! background loader), forward user input to it, pump it from their frame
//! or timer loop, and register a [`RenderSink`] to receive value maps.

pub mod error;
pub mod legend;
pub mod logging;
pub mod playback;
pub mod render;
pub mod selection;
pub mod session;
pub mod settings;
pub mod timer;
pub mod value_map;

pub use error::{Result, SettingsError};
pub use legend::{
    CO2_SCALE, ColorScale, DatasetStyle, LegendStop, MISSING_COLOR, Rgb, TEMPERATURE_SCALE,
};
pub use logging::{LogConfig, LogFormat, LogLevel, init_logging, init_logging_with_writer};
pub use playback::{PlaybackState, PlaybackStepper, Tick};
pub use render::RenderSink;
pub use selection::{Commit, CommitGate, SelectionState};
pub use session::Session;
pub use settings::{
    DatasetPaths, PlaybackSettings, SessionSettings, Settings, TimelineSettings, load_settings,
    save_settings, settings_path, try_load_settings,
};
pub use timer::Interval;
pub use value_map::build_value_map;

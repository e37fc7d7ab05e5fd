//! Color scales, legend stops and tooltip text per dataset.

use std::fmt;

use serde::Serialize;

use globe_model::ActiveDataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Countries without a value.
pub const MISSING_COLOR: Rgb = Rgb::new(0x55, 0x55, 0x55);

/// Banded scale: the value is clamped to `[min, max]`, normalized to
/// `[0, 1]`, and takes the color of the first band whose `below` bound it
/// is under, or `top` past the last band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
    pub bands: &'static [(f64, Rgb)],
    pub top: Rgb,
}

impl ColorScale {
    pub fn position(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        (value.clamp(self.min, self.max) - self.min) / span
    }

    pub fn color_for(&self, value: Option<f64>) -> Rgb {
        let Some(value) = value.filter(|v| v.is_finite()) else {
            return MISSING_COLOR;
        };
        let x = self.position(value);
        self.bands
            .iter()
            .find(|(below, _)| x < *below)
            .map_or(self.top, |(_, color)| *color)
    }
}

pub const TEMPERATURE_SCALE: ColorScale = ColorScale {
    min: -20.0,
    max: 40.0,
    bands: &[
        (0.15, Rgb::new(0x0b, 0x3c, 0x5d)),
        (0.30, Rgb::new(0x32, 0x88, 0xbd)),
        (0.45, Rgb::new(0x66, 0xc2, 0xa5)),
        (0.60, Rgb::new(0xab, 0xdd, 0xa4)),
        (0.75, Rgb::new(0xfe, 0xe0, 0x8b)),
        (0.90, Rgb::new(0xf4, 0x6d, 0x43)),
    ],
    top: Rgb::new(0xd7, 0x30, 0x27),
};

/// Tonnes per capita, pale yellow to deep red.
pub const CO2_SCALE: ColorScale = ColorScale {
    min: 0.0,
    max: 20.0,
    bands: &[
        (0.10, Rgb::new(0xff, 0xff, 0xb2)),
        (0.25, Rgb::new(0xfe, 0xd9, 0x76)),
        (0.40, Rgb::new(0xfe, 0xb2, 0x4c)),
        (0.60, Rgb::new(0xfd, 0x8d, 0x3c)),
        (0.80, Rgb::new(0xf0, 0x3b, 0x20)),
    ],
    top: Rgb::new(0xbd, 0x00, 0x26),
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendStop {
    pub label: String,
    pub value: f64,
    pub color: Rgb,
}

/// Everything a renderer needs to color and label one dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetStyle {
    pub dataset: ActiveDataset,
    pub metric: &'static str,
    pub unit: &'static str,
    pub scale: ColorScale,
    stops: &'static [f64],
}

impl DatasetStyle {
    pub fn for_dataset(dataset: ActiveDataset) -> Self {
        match dataset {
            ActiveDataset::Temperature => Self {
                dataset,
                metric: "Temperature",
                unit: "°C",
                scale: TEMPERATURE_SCALE,
                stops: &[-20.0, -10.0, 0.0, 10.0, 20.0, 30.0, 40.0],
            },
            ActiveDataset::Co2 => Self {
                dataset,
                metric: "CO₂ per capita",
                unit: " t",
                scale: CO2_SCALE,
                stops: &[0.0, 2.0, 5.0, 10.0, 15.0, 20.0],
            },
        }
    }

    pub fn label(&self) -> &'static str {
        self.dataset.label()
    }

    /// Shown next to the date input.
    pub fn snapping_hint(&self) -> &'static str {
        self.dataset.snapping_hint()
    }

    pub fn color_for(&self, value: Option<f64>) -> Rgb {
        self.scale.color_for(value)
    }

    /// Ordered stops spanning the scale, each swatch colored by the scale.
    pub fn legend_stops(&self) -> Vec<LegendStop> {
        self.stops
            .iter()
            .map(|&value| LegendStop {
                label: format!("{value}{}", self.unit),
                value,
                color: self.color_for(Some(value)),
            })
            .collect()
    }

    /// `"<name>\n<metric>: <value><unit>"`, with `—` for a missing value.
    pub fn tooltip(&self, name: &str, value: Option<f64>) -> String {
        match value.filter(|v| v.is_finite()) {
            Some(v) => format!("{name}\n{}: {v:.2}{}", self.metric, self.unit),
            None => format!("{name}\n{}: —", self.metric),
        }
    }
}

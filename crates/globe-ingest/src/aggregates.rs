//! Region and income-group pseudo-countries in the OWID CO₂ table.
//!
//! These rows aggregate real countries and would collide with, or overwrite,
//! canonical country labels, so they are dropped at ingestion.

pub const CO2_AGGREGATE_REGIONS: &[&str] = &[
    "World",
    "Africa",
    "Asia",
    "Asia (excl. China and India)",
    "Europe",
    "Europe (excl. EU-27)",
    "Europe (excl. EU-28)",
    "European Union (27)",
    "European Union (28)",
    "High-income countries",
    "Lower-middle-income countries",
    "Upper-middle-income countries",
    "North America",
    "North America (excl. USA)",
    "Oceania",
    "South America",
];

pub fn is_aggregate_region(country: &str) -> bool {
    CO2_AGGREGATE_REGIONS.contains(&country)
}

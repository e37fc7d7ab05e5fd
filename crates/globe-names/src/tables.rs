//! Curated native -> canonical overrides.
//!
//! Canonical labels follow the Natural Earth 110m country names used by the
//! globe geometry. The tables are known to be incomplete; unlisted names
//! pass through unchanged.

/// Overrides for the Berkeley Earth land temperature table.
pub const TEMPERATURE_OVERRIDES: &[(&str, &str)] = &[
    ("Åland", "Finland"),
    ("United States", "United States of America"),
    ("Republic of the Congo", "Congo"),
    ("Bosnia And Herzegovina", "Bosnia and Herz."),
    ("Central African Republic", "Central African Rep."),
    ("Dominican Republic", "Dominican Rep."),
    ("Equatorial Guinea", "Eq. Guinea"),
    ("Solomon Islands", "Solomon Is."),
    ("Western Sahara", "W. Sahara"),
    ("Guinea Bissau", "Guinea-Bissau"),
    ("Falkland Islands (Islas Malvinas)", "Falkland Is."),
    ("Congo (Democratic Republic Of The)", "Dem. Rep. Congo"),
    ("Burma", "Myanmar"),
    ("Czech Republic", "Czechia"),
    ("Swaziland", "eSwatini"),
    ("Timor Leste", "Timor-Leste"),
    ("Dem. Rep. Korea", "North Korea"),
    ("Republic of Korea", "South Korea"),
    ("Palestina", "Palestine"),
    ("Côte D'Ivoire", "Côte d'Ivoire"),
    ("S. Sudan", "South Sudan"),
];

/// Overrides for the Our World in Data CO₂ table.
///
/// OWID spells Bosnia with a lowercase "and" and uses the post-2019 name for
/// North Macedonia, so this table carries two entries the temperature one lacks.
pub const CO2_OVERRIDES: &[(&str, &str)] = &[
    ("Åland", "Finland"),
    ("United States", "United States of America"),
    ("Republic of the Congo", "Congo"),
    ("Bosnia And Herzegovina", "Bosnia and Herz."),
    ("Central African Republic", "Central African Rep."),
    ("Dominican Republic", "Dominican Rep."),
    ("Equatorial Guinea", "Eq. Guinea"),
    ("Solomon Islands", "Solomon Is."),
    ("Western Sahara", "W. Sahara"),
    ("Guinea Bissau", "Guinea-Bissau"),
    ("Falkland Islands (Islas Malvinas)", "Falkland Is."),
    ("Congo (Democratic Republic Of The)", "Dem. Rep. Congo"),
    ("Burma", "Myanmar"),
    ("Czech Republic", "Czechia"),
    ("Swaziland", "eSwatini"),
    ("Timor Leste", "Timor-Leste"),
    ("Dem. Rep. Korea", "North Korea"),
    ("Republic of Korea", "South Korea"),
    ("Palestina", "Palestine"),
    ("Côte D'Ivoire", "Côte d'Ivoire"),
    ("Bosnia and Herzegovina", "Bosnia and Herz."),
    ("North Macedonia", "Macedonia"),
    ("S. Sudan", "South Sudan"),
];

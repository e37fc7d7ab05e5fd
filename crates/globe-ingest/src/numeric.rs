//! Numeric cell parsing.

/// Parse a cell as `f64`.
///
/// Empty, unparseable and non-finite cells (`NaN`, `inf`) are all missing.
/// A missing value is never coerced to zero.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

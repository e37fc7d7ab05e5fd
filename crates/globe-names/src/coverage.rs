//! How much of the value map lands on a geometry polygon.

use std::collections::BTreeSet;

use globe_model::ValueMap;

/// Labels present in a value map versus the geometry's canonical names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    pub matched: usize,
    /// Value-map labels with no polygon of that name.
    pub unmatched: Vec<String>,
    /// Polygons left without a value.
    pub uncovered: usize,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Compare value-map labels with the geometry's name property.
///
/// Unmatched labels are an accepted degradation; they are reported, not fixed.
pub fn coverage<'a, I>(values: &ValueMap, geometry_names: I) -> CoverageReport
where
    I: IntoIterator<Item = &'a str>,
{
    let names: BTreeSet<&str> = geometry_names.into_iter().collect();
    let mut report = CoverageReport::default();
    for label in values.labels() {
        if names.contains(label) {
            report.matched += 1;
        } else {
            report.unmatched.push(label.to_string());
        }
    }
    report.uncovered = names.len().saturating_sub(report.matched);
    if !report.unmatched.is_empty() {
        tracing::debug!(
            unmatched = report.unmatched.len(),
            matched = report.matched,
            "value map labels without geometry"
        );
    }
    report
}

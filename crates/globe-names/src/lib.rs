//! Country name reconciliation.
//!
//! Each per-country dataset spells some countries differently from the
//! globe geometry. A curated [`NameMap`] per dataset translates native labels
//! to canonical ones; anything not listed passes through verbatim.

pub mod coverage;
pub mod map;
pub mod reconciler;
pub mod tables;

pub use coverage::{CoverageReport, coverage};
pub use map::NameMap;
pub use reconciler::{NameOverrides, NameReconciler};

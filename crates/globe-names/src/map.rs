use std::collections::HashMap;

/// Exact-match lookup from native to canonical labels with identity fallback.
///
/// Modeled on a codelist with a synonym table: keys are unique, later
/// entries replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct NameMap {
    entries: HashMap<String, String>,
}

impl NameMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Self::new();
        map.extend(pairs);
        map
    }

    /// Layer additional entries on top, replacing existing keys.
    pub fn extend<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (native, canonical) in pairs {
            self.entries.insert(native.into(), canonical.into());
        }
    }

    /// Resolve a native label. Total: unknown labels come back unchanged.
    pub fn resolve<'a>(&'a self, native: &'a str) -> &'a str {
        self.entries.get(native).map_or(native, String::as_str)
    }

    /// True when the label has an explicit override.
    pub fn is_mapped(&self, native: &str) -> bool {
        self.entries.contains_key(native)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

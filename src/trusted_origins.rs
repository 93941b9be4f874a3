use crate::origin::Origin;
use indexmap::IndexSet;

/// Canonical origins whose requests are allowed, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedOrigins {
    origins: IndexSet<String>,
}

impl TrustedOrigins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the origin was already present.
    pub fn insert(&mut self, origin: &Origin) -> bool {
        self.origins.insert(origin.to_string())
    }

    /// Exact, case-sensitive comparison against a raw `Origin` header value.
    pub fn contains(&self, header_value: &str) -> bool {
        self.origins.contains(header_value)
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "trusted_origins_test.rs"]
mod trusted_origins_test;

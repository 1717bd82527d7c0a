use std::collections::BTreeSet;

use serde::Serialize;

/// Request-scoped record of narration fragments that could not be attributed.
///
/// Suspicious fragments never fail a conversion. They are collected here so
/// the caller can report them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    suspicious: BTreeSet<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a suspicious fragment. Duplicates are kept once.
    pub fn record(&mut self, fragment: impl Into<String>) {
        self.suspicious.insert(fragment.into());
    }

    pub fn suspicious(&self) -> impl Iterator<Item = &str> {
        self.suspicious.iter().map(String::as_str)
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.suspicious.contains(fragment)
    }

    pub fn len(&self) -> usize {
        self.suspicious.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suspicious.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod tests;

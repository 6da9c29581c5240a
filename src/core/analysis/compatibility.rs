//! Regex engine identifiers and per-engine acceptance records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Target regex engine dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegexEngine {
    Pcre,
    Re2,
    /// The host engine (the `regex` crate).
    Rust,
    Javascript,
    Java,
}

impl RegexEngine {
    pub const ALL: [RegexEngine; 5] = [
        RegexEngine::Pcre,
        RegexEngine::Re2,
        RegexEngine::Rust,
        RegexEngine::Javascript,
        RegexEngine::Java,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegexEngine::Pcre => "pcre",
            RegexEngine::Re2 => "re2",
            RegexEngine::Rust => "rust",
            RegexEngine::Javascript => "javascript",
            RegexEngine::Java => "java",
        }
    }
}

impl fmt::Display for RegexEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from engine to "pattern accepted under this dialect".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompatibilityMap(BTreeMap<RegexEngine, bool>);

impl CompatibilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, engine: RegexEngine, accepted: bool) {
        self.0.insert(engine, accepted);
    }

    pub fn get(&self, engine: RegexEngine) -> Option<bool> {
        self.0.get(&engine).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn engines(&self) -> impl Iterator<Item = RegexEngine> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegexEngine, bool)> + '_ {
        self.0.iter().map(|(e, ok)| (*e, *ok))
    }

    /// Engines that rejected the pattern.
    pub fn incompatible(&self) -> Vec<RegexEngine> {
        self.iter().filter(|(_, ok)| !ok).map(|(e, _)| e).collect()
    }

    /// True when at least one engine was probed and every one rejected.
    pub fn none_accepted(&self) -> bool {
        !self.0.is_empty() && self.0.values().all(|ok| !ok)
    }
}

impl FromIterator<(RegexEngine, bool)> for CompatibilityMap {
    fn from_iter<I: IntoIterator<Item = (RegexEngine, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_serializes_as_object() {
        let map: CompatibilityMap = [(RegexEngine::Re2, false), (RegexEngine::Pcre, true)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"pcre":true,"re2":false}"#);
        assert_eq!(map.incompatible(), vec![RegexEngine::Re2]);
        assert!(!map.none_accepted());
    }

    #[test]
    fn empty_map_is_not_none_accepted() {
        assert!(!CompatibilityMap::new().none_accepted());
    }
}

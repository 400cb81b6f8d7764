use std::collections::HashSet;
use std::fmt;

use super::builtin::BUILTIN_TLDS;

/// Where the current entry set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TldSource {
    Builtin,
    Location(String),
}

impl fmt::Display for TldSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("builtin"),
            Self::Location(location) => f.write_str(location),
        }
    }
}

#[derive(Debug, Clone)]
pub enum TldSet {
    Builtin(&'static phf::Set<&'static str>),
    Loaded(HashSet<String>),
}

impl TldSet {
    pub fn contains(&self, tld: &str) -> bool {
        match self {
            Self::Builtin(set) => set.contains(tld),
            Self::Loaded(set) => set.contains(tld),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Builtin(set) => set.len(),
            Self::Loaded(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An immutable view of the registry. Holding one keeps the lookups
/// consistent across a concurrent refresh.
#[derive(Debug, Clone)]
pub struct TldSnapshot {
    pub entries: TldSet,
    pub source: TldSource,
}

impl TldSnapshot {
    pub fn builtin() -> Self {
        Self {
            entries: TldSet::Builtin(&BUILTIN_TLDS),
            source: TldSource::Builtin,
        }
    }

    pub fn new(entries: HashSet<String>, source: TldSource) -> Self {
        Self {
            entries: TldSet::Loaded(entries),
            source,
        }
    }

    /// Exact, case-sensitive membership. Non UTF-8 labels are never members.
    pub fn contains(&self, label: &[u8]) -> bool {
        match std::str::from_utf8(label) {
            Ok(tld) => self.entries.contains(tld),
            Err(_) => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! ABI registry: contract name → ordered set of canonical schema strings.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Mapping from contract name to the canonical serialized interface schemas
/// recorded for it.
///
/// Semantically a deduplicated ordered set per name: identical canonical
/// strings are never appended twice. The persisted form is always an array
/// of strings, including for a name's first entry. Older stores that kept a
/// name's first schema as a bare string are accepted on load and normalized
/// to a singleton list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AbiBook {
    entries: BTreeMap<String, Vec<String>>,
}

/// Legacy-tolerant persisted entry shape.
#[derive(Deserialize)]
#[serde(untagged)]
enum AbiEntry {
    Many(Vec<String>),
    One(String),
}

impl<'de> Deserialize<'de> for AbiBook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: BTreeMap<String, AbiEntry> = BTreeMap::deserialize(deserializer)?;
        let entries = raw
            .into_iter()
            .map(|(name, entry)| {
                let schemas = match entry {
                    AbiEntry::Many(schemas) => schemas,
                    AbiEntry::One(schema) => vec![schema],
                };
                (name, schemas)
            })
            .collect();
        Ok(Self { entries })
    }
}

impl AbiBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a schema for a contract name. Appends only if the exact
    /// canonical string is not already present for that name.
    ///
    /// Returns `true` if the book changed.
    pub fn record(&mut self, name: &str, canonical_schema: &str) -> bool {
        let schemas = self.entries.entry(name.to_string()).or_default();
        if schemas.iter().any(|existing| existing == canonical_schema) {
            return false;
        }
        schemas.push(canonical_schema.to_string());
        true
    }

    /// Schemas recorded for a contract name, in insertion order.
    #[must_use]
    pub fn schemas(&self, name: &str) -> &[String] {
        self.entries.get(name).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, name: &str, canonical_schema: &str) -> bool {
        self.schemas(name)
            .iter()
            .any(|existing| existing == canonical_schema)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

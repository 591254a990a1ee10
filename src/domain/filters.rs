//! Toggleable include/exclude sets over the table's four filter dimensions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entities::ItemValuation;

/// One dimension's key -> included mapping. A key that was never toggled is
/// included: persisted state from an older catalogue must not hide newly
/// introduced groups or tags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet {
    entries: BTreeMap<String, bool>,
}

impl FilterSet {
    pub fn enabled(&self, key: &str) -> bool {
        self.entries.get(key).copied().unwrap_or(true)
    }

    /// Flips exactly this key; every other entry is left untouched.
    pub fn toggle(&mut self, key: &str) {
        let flipped = !self.enabled(key);
        self.entries.insert(key.to_string(), flipped);
    }

    /// Records observed dimension values without overwriting persisted
    /// toggles, so the chip row renders from a stable state.
    pub fn seed<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            self.entries.entry(key.into()).or_insert(true);
        }
    }
}

/// The four independent dimensions a row must pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub groups: FilterSet,
    #[serde(default)]
    pub bonuses: FilterSet,
    #[serde(default)]
    pub compressed: FilterSet,
    #[serde(default)]
    pub availability: FilterSet,
}

/// Keys for the compressed dimension, mirroring the persisted shape.
pub fn compressed_key(compressed: bool) -> &'static str {
    if compressed {
        "true"
    } else {
        "false"
    }
}

impl FilterState {
    /// Group, bonus, and compression are direct single-key lookups ANDed
    /// together; availability is existential over the row's own tags.
    pub fn passes(&self, record: &ItemValuation) -> bool {
        self.groups.enabled(&record.group)
            && self.bonuses.enabled(&record.bonus)
            && self.compressed.enabled(compressed_key(record.compressed))
            && record
                .available_in
                .iter()
                .any(|tag| self.availability.enabled(tag))
    }
}

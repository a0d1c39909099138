//! The in-progress form record and its change reducer

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Mapping from field id to its current string value.
///
/// Keys appear only once a field has been changed; reading an absent key
/// yields the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(BTreeMap<String, String>);

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value, `""` when the field was never touched
    pub fn value(&self, id: &str) -> &str {
        self.get(id).unwrap_or_default()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    /// Whether the field has received at least one change
    pub fn is_touched(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// New record with `id` set to `value`; every other key is carried over
    pub fn with_value(&self, id: &str, value: impl Into<String>) -> Self {
        let mut next = self.0.clone();
        next.insert(id.to_string(), value.into());
        Self(next)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl fmt::Display for FormData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Reducer form of [`FormData::with_value`]: `(record, id, value) -> record'`
pub fn apply_change(record: &FormData, id: &str, value: impl Into<String>) -> FormData {
    record.with_value(id, value)
}

//! Attribute list parser: `[k1=v1, k2="v 2"]` → [`Attributes`].
//!
//! Entries are split on unquoted commas and each entry on its first unquoted
//! `=`. Keys and values are trimmed and one layer of matching surrounding
//! quotes (`"` or `'`) is stripped from the value. Quoted content is kept
//! verbatim: escapes are not interpreted. Entries without `=` are ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SyntaxError;
use crate::scan::{find_top_level, split_top_level};

/// Raw attributes of one declaration. A repeated key keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Remove and return `key`, marking the attribute as consumed.
    pub fn take(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Strip one layer of matching `"` or `'` quotes, if present.
pub fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parse a bracketed attribute list.
pub fn parse_attribute_list(segment: &str) -> Result<Attributes, SyntaxError> {
    let segment = segment.trim();
    let interior = segment
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| SyntaxError::NotAnAttributeList(segment.to_string()))?;

    let mut attributes = Attributes::new();
    for entry in split_top_level(interior, ',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let Some(eq) = find_top_level(entry, "=") else {
            tracing::debug!(entry = %entry, "ignoring attribute entry without `=`");
            continue;
        };
        let key = entry[..eq].trim();
        if key.is_empty() {
            tracing::debug!(entry = %entry, "ignoring attribute entry with empty key");
            continue;
        }
        let value = unquote(entry[eq + 1..].trim());
        attributes.insert(key, value);
    }
    Ok(attributes)
}

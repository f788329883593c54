use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::model::NodeRecord;

/// The validated output: node id → record.
///
/// Every id referenced by any dependency list is a key of the same graph.
/// Instances are only produced by the builder or by deserialization, both of
/// which enforce that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    nodes: BTreeMap<String, NodeRecord>,
}

impl DependencyGraph {
    pub(crate) fn from_validated(nodes: BTreeMap<String, NodeRecord>) -> Self {
        Self { nodes }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&NodeRecord> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Records in id order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeRecord> {
        self.nodes.values()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Total dependency entries, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.nodes
            .values()
            .map(|r| r.type_dependencies.len() + r.term_dependencies.len())
            .sum()
    }

    /// Canonical JSON rendering (pretty-printed, ids sorted).
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn dangling_reference(&self) -> Option<(&str, &str)> {
        self.nodes.values().find_map(|record| {
            record
                .dependencies()
                .find(|dep| !self.nodes.contains_key(*dep))
                .map(|dep| (record.id.as_str(), dep))
        })
    }
}

impl<'de> Deserialize<'de> for DependencyGraph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut nodes = BTreeMap::<String, NodeRecord>::deserialize(deserializer)?;
        for (id, record) in nodes.iter_mut() {
            record.id = id.clone();
        }
        let graph = Self { nodes };
        if let Some((from, missing)) = graph.dangling_reference() {
            return Err(serde::de::Error::custom(format!(
                "node `{from}` depends on unknown node `{missing}`"
            )));
        }
        Ok(graph)
    }
}

//! Aggregate counts over an extracted graph (the CLI's analysis output).

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::graph::DependencyGraph;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub kinds: BTreeMap<String, usize>,
    pub type_statuses: BTreeMap<String, usize>,
    pub term_statuses: BTreeMap<String, usize>,
    pub type_dependencies: usize,
    pub term_dependencies: usize,
    /// Nodes that never received a content fragment.
    pub without_content: Vec<String>,
    /// Nodes that depend on nothing.
    pub leaves: Vec<String>,
    /// Nodes nothing depends on.
    pub roots: Vec<String>,
}

impl GraphSummary {
    pub fn of(graph: &DependencyGraph) -> Self {
        let mut summary = Self {
            nodes: graph.len(),
            ..Self::default()
        };
        let mut referenced: BTreeSet<&str> = BTreeSet::new();

        for record in graph.iter() {
            *summary.kinds.entry(record.kind.to_string()).or_default() += 1;
            *summary
                .type_statuses
                .entry(record.type_status.to_string())
                .or_default() += 1;
            *summary
                .term_statuses
                .entry(record.term_status.to_string())
                .or_default() += 1;
            summary.type_dependencies += record.type_dependencies.len();
            summary.term_dependencies += record.term_dependencies.len();

            if record.content.is_empty() {
                summary.without_content.push(record.id.clone());
            }
            if record.dependencies().next().is_none() {
                summary.leaves.push(record.id.clone());
            }
            referenced.extend(record.dependencies());
        }

        summary.roots = graph
            .node_ids()
            .filter(|id| !referenced.contains(id))
            .map(str::to_string)
            .collect();
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;
    use crate::model::{DependencyEdge, DependencyLevel, NodeKind, NodeRecord, TermStatus, TypeStatus};

    #[test]
    fn counts_statuses_and_structure() {
        let mut builder = GraphBuilder::new();
        builder
            .add_node(NodeRecord::new("a", NodeKind::Definition, TypeStatus::Stated, TermStatus::Defined))
            .unwrap();
        builder
            .add_node(NodeRecord::new("b", NodeKind::Theorem, TypeStatus::CanState, TermStatus::CanProve))
            .unwrap();
        builder
            .add_node(NodeRecord::new("c", NodeKind::Theorem, TypeStatus::Stated, TermStatus::Proved))
            .unwrap();
        for (source, target, level) in [
            ("c", "a", DependencyLevel::Type),
            ("c", "b", DependencyLevel::Term),
            ("b", "a", DependencyLevel::Term),
        ] {
            builder
                .add_edge(DependencyEdge {
                    source: source.to_string(),
                    target: target.to_string(),
                    level,
                })
                .unwrap();
        }
        builder.merge_content("a", "<p>a</p>").unwrap();

        let summary = GraphSummary::of(&builder.finalize());
        assert_eq!(summary.nodes, 3);
        assert_eq!(summary.kinds["theorem"], 2);
        assert_eq!(summary.kinds["definition"], 1);
        assert_eq!(summary.type_statuses["stated"], 2);
        assert_eq!(summary.term_statuses["can-prove"], 1);
        assert_eq!(summary.type_dependencies, 1);
        assert_eq!(summary.term_dependencies, 2);
        assert_eq!(summary.without_content, vec!["b", "c"]);
        assert_eq!(summary.leaves, vec!["a"]);
        assert_eq!(summary.roots, vec!["c"]);
    }

    #[test]
    fn empty_graph_has_empty_summary() {
        assert_eq!(GraphSummary::of(&DependencyGraph::empty()), GraphSummary::default());
    }
}

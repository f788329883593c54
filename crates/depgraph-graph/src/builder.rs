//! Graph builder: exclusive owner of the graph under construction.

use std::collections::BTreeMap;

use crate::error::{ValidationError, ValidationErrorKind};
use crate::graph::DependencyGraph;
use crate::model::{DependencyEdge, DependencyLevel, NodeRecord};

#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: BTreeMap<String, NodeRecord>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
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

    /// Insert a node; a second declaration of the same id is rejected.
    pub fn add_node(&mut self, record: NodeRecord) -> Result<(), ValidationError> {
        if self.nodes.contains_key(&record.id) {
            return Err(ValidationErrorKind::DuplicateNode { id: record.id }.into());
        }
        tracing::debug!(node = %record.id, kind = %record.kind, "added node");
        self.nodes.insert(record.id.clone(), record);
        Ok(())
    }

    /// Append `edge.target` to the source's dependency list for its level.
    /// Order and duplicates are preserved.
    pub fn add_edge(&mut self, edge: DependencyEdge) -> Result<(), ValidationError> {
        let target_known = self.nodes.contains_key(&edge.target);
        let Some(source) = self.nodes.get_mut(&edge.source) else {
            let missing = edge.source.clone();
            return Err(dangling(edge, missing));
        };
        if !target_known {
            let missing = edge.target.clone();
            return Err(dangling(edge, missing));
        }

        tracing::debug!(
            from = %edge.source,
            to = %edge.target,
            level = ?edge.level,
            "added dependency"
        );
        match edge.level {
            DependencyLevel::Type => source.type_dependencies.push(edge.target),
            DependencyLevel::Term => source.term_dependencies.push(edge.target),
        }
        Ok(())
    }

    /// Replace a node's content with `fragment` verbatim.
    pub fn merge_content(&mut self, id: &str, fragment: &str) -> Result<(), ValidationError> {
        let record = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| ValidationErrorKind::UnknownContentId { id: id.to_string() })?;
        record.content = fragment.to_string();
        Ok(())
    }

    pub fn finalize(self) -> DependencyGraph {
        DependencyGraph::from_validated(self.nodes)
    }
}

fn dangling(edge: DependencyEdge, missing: String) -> ValidationError {
    ValidationErrorKind::DanglingReference {
        from: edge.source,
        to: edge.target,
        missing,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NodeKind, TermStatus, TypeStatus};

    fn record(id: &str) -> NodeRecord {
        NodeRecord::new(id, NodeKind::Theorem, TypeStatus::Unknown, TermStatus::Unknown)
    }

    fn edge(source: &str, target: &str, level: DependencyLevel) -> DependencyEdge {
        DependencyEdge {
            source: source.to_string(),
            target: target.to_string(),
            level,
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut builder = GraphBuilder::new();
        builder.add_node(record("a")).unwrap();
        let err = builder.add_node(record("a")).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::DuplicateNode { id: "a".to_string() });
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn edges_append_in_order_with_duplicates() {
        let mut builder = GraphBuilder::new();
        for id in ["a", "b", "c"] {
            builder.add_node(record(id)).unwrap();
        }
        builder.add_edge(edge("a", "c", DependencyLevel::Term)).unwrap();
        builder.add_edge(edge("a", "b", DependencyLevel::Type)).unwrap();
        builder.add_edge(edge("a", "b", DependencyLevel::Term)).unwrap();
        builder.add_edge(edge("a", "c", DependencyLevel::Term)).unwrap();

        let graph = builder.finalize();
        let a = graph.get("a").unwrap();
        assert_eq!(a.type_dependencies, vec!["b"]);
        assert_eq!(a.term_dependencies, vec!["c", "b", "c"]);
        assert!(graph.get("b").unwrap().term_dependencies.is_empty());
    }

    #[test]
    fn self_edges_are_allowed() {
        let mut builder = GraphBuilder::new();
        builder.add_node(record("a")).unwrap();
        builder.add_edge(edge("a", "a", DependencyLevel::Term)).unwrap();
        assert_eq!(builder.finalize().get("a").unwrap().term_dependencies, vec!["a"]);
    }

    #[test]
    fn dangling_endpoint_names_the_missing_node() {
        let mut builder = GraphBuilder::new();
        builder.add_node(record("a")).unwrap();

        let err = builder.add_edge(edge("a", "ghost", DependencyLevel::Type)).unwrap_err();
        assert_eq!(
            err.kind,
            ValidationErrorKind::DanglingReference {
                from: "a".to_string(),
                to: "ghost".to_string(),
                missing: "ghost".to_string(),
            }
        );

        let err = builder.add_edge(edge("ghost", "a", DependencyLevel::Term)).unwrap_err();
        assert!(err.to_string().contains("unknown node `ghost`"));
    }

    #[test]
    fn merge_content_overwrites_and_checks_ids() {
        let mut builder = GraphBuilder::new();
        builder.add_node(record("a")).unwrap();
        builder.merge_content("a", "<p>first</p>").unwrap();
        builder.merge_content("a", "<p>second</p>").unwrap();

        let err = builder.merge_content("b", "<p>x</p>").unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::UnknownContentId { id: "b".to_string() });

        assert_eq!(builder.finalize().get("a").unwrap().content, "<p>second</p>");
    }
}

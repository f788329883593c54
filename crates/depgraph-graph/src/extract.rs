//! Extraction entry point: payload text + content map → [`DependencyGraph`].
//!
//! One pass over the statements in source order adds nodes as they are
//! declared and queues edges; queued edges are then applied in encounter
//! order, and content fragments are merged last. The first fatal error aborts
//! the whole extraction and no graph is returned.

use std::collections::BTreeMap;

use depgraph_dot::{classify, tokenize, Statement};
use serde::{Deserialize, Serialize};

use crate::builder::GraphBuilder;
use crate::edge::classify_edge;
use crate::error::{ExtractError, ValidationError, ValidationErrorKind};
use crate::graph::DependencyGraph;
use crate::mapper::map_node;
use crate::model::DependencyLevel;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Fail on statements that are neither default blocks, nodes nor edges
    /// instead of skipping them with a warning.
    pub reject_unrecognized: bool,
}

/// Bookkeeping for one extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub defaults_discarded: usize,
    pub nodes: usize,
    pub type_edges: usize,
    pub term_edges: usize,
    pub content_merged: usize,
    /// Statements skipped as unrecognized, verbatim.
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub graph: DependencyGraph,
    pub report: ExtractionReport,
}

/// Extract with default options, returning only the graph.
pub fn extract_dependency_graph(
    payload: &str,
    content: &BTreeMap<String, String>,
) -> Result<DependencyGraph, ExtractError> {
    extract_with_options(payload, content, &ExtractOptions::default()).map(|e| e.graph)
}

pub fn extract_with_options(
    payload: &str,
    content: &BTreeMap<String, String>,
    options: &ExtractOptions,
) -> Result<Extraction, ExtractError> {
    let mut builder = GraphBuilder::new();
    let mut report = ExtractionReport::default();
    let mut pending = Vec::new();

    for text in tokenize(payload)? {
        let in_statement = |err: ValidationError| err.with_statement(text);

        match classify(text).map_err(|e| in_statement(e.into()))? {
            Statement::Defaults { target } => {
                tracing::trace!(block = ?target, "discarding default attribute block");
                report.defaults_discarded += 1;
            }
            Statement::Node(decl) => {
                let record = map_node(decl).map_err(|kind| in_statement(kind.into()))?;
                builder.add_node(record).map_err(in_statement)?;
                report.nodes += 1;
            }
            Statement::Edge(decl) => pending.push((classify_edge(decl), text)),
            Statement::Unrecognized { text: raw } => {
                if options.reject_unrecognized {
                    return Err(in_statement(ValidationErrorKind::UnrecognizedStatement.into()).into());
                }
                tracing::warn!(statement = %raw, "skipped unrecognized statement");
                report.skipped.push(raw);
            }
        }
    }

    for (edge, text) in pending {
        let level = edge.level;
        builder
            .add_edge(edge)
            .map_err(|err| err.with_statement(text))?;
        match level {
            DependencyLevel::Type => report.type_edges += 1,
            DependencyLevel::Term => report.term_edges += 1,
        }
    }

    for (id, fragment) in content {
        builder.merge_content(id, fragment)?;
        report.content_merged += 1;
    }

    tracing::debug!(
        nodes = report.nodes,
        type_edges = report.type_edges,
        term_edges = report.term_edges,
        content = report.content_merged,
        skipped = report.skipped.len(),
        "extracted dependency graph"
    );

    Ok(Extraction {
        graph: builder.finalize(),
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(statements: &[&str]) -> String {
        format!("strict digraph \"\" {{{}}}", statements.join(";\t"))
    }

    #[test]
    fn edge_may_precede_its_endpoints() {
        let text = payload(&[
            "a -> b",
            "a [shape=box, label=a]",
            "b [shape=box, label=b]",
        ]);
        let graph = extract_dependency_graph(&text, &BTreeMap::new()).unwrap();
        assert_eq!(graph.get("a").unwrap().term_dependencies, vec!["b"]);
    }

    #[test]
    fn report_counts_every_statement_class() {
        let text = payload(&[
            "graph [bgcolor=transparent]",
            "node [penwidth=1.8]",
            "edge [arrowhead=vee]",
            "a [shape=box, label=a]",
            "b [shape=ellipse, label=b]",
            "b -> a [style=dashed]",
            "b -> a",
            "rankdir=LR",
        ]);
        let content = BTreeMap::from([("a".to_string(), "<div>a</div>".to_string())]);
        let extraction = extract_with_options(&text, &content, &ExtractOptions::default()).unwrap();
        assert_eq!(
            extraction.report,
            ExtractionReport {
                defaults_discarded: 3,
                nodes: 2,
                type_edges: 1,
                term_edges: 1,
                content_merged: 1,
                skipped: vec!["rankdir=LR".to_string()],
            }
        );
    }

    #[test]
    fn strict_mode_rejects_unrecognized_statements() {
        let text = payload(&["a [shape=box, label=a]", "rankdir=LR"]);
        let options = ExtractOptions {
            reject_unrecognized: true,
        };
        let err = extract_with_options(&text, &BTreeMap::new(), &options).unwrap_err();
        assert_eq!(
            err,
            ExtractError::Validation(ValidationError {
                kind: ValidationErrorKind::UnrecognizedStatement,
                statement: Some("rankdir=LR".to_string()),
            })
        );
    }

    #[test]
    fn syntax_errors_carry_the_statement() {
        let text = payload(&["a -> b -> c"]);
        let err = extract_dependency_graph(&text, &BTreeMap::new()).unwrap_err();
        assert!(matches!(
            err.validation_kind(),
            Some(ValidationErrorKind::Syntax(depgraph_dot::SyntaxError::EdgeChain))
        ));
        assert!(err.to_string().contains("a -> b -> c"), "err={err}");
    }
}

//! Theorem/definition dependency graph
//!
//! Turns the DOT payload emitted by the blueprint generator into a validated
//! [`DependencyGraph`]:
//! - `mapper`: presentation attributes (shape, color, fillcolor, label, style)
//!   → [`NodeRecord`] (kind, type-status, term-status),
//! - `edge`: edge style → type-level or term-level dependency,
//! - `builder`: id uniqueness, referential integrity, content merge,
//! - `extract`: the all-or-nothing extraction entry point.
//!
//! Extraction is a pure function of the payload text and the content map:
//! the same input always produces the same graph, including dependency order.

pub mod builder;
pub mod digest;
pub mod edge;
pub mod error;
pub mod extract;
pub mod graph;
pub mod mapper;
pub mod model;
pub mod summary;

pub use builder::GraphBuilder;
pub use digest::graph_digest;
pub use edge::classify_edge;
pub use error::{ExtractError, ValidationError, ValidationErrorKind};
pub use extract::{
    extract_dependency_graph, extract_with_options, ExtractOptions, Extraction, ExtractionReport,
};
pub use graph::DependencyGraph;
pub use mapper::map_node;
pub use model::{DependencyEdge, DependencyLevel, NodeKind, NodeRecord, TermStatus, TypeStatus};
pub use summary::GraphSummary;

pub use depgraph_dot::StructuralError;

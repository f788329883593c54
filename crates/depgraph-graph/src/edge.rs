//! Edge classifier: `style=dashed` means a type-level dependency, anything
//! else (including no style) a term-level one.

use depgraph_dot::EdgeDecl;

use crate::model::{DependencyEdge, DependencyLevel};

pub const STYLE_DASHED: &str = "dashed";

pub fn classify_edge(decl: EdgeDecl) -> DependencyEdge {
    let level = match decl.attributes.get("style") {
        Some(STYLE_DASHED) => DependencyLevel::Type,
        _ => DependencyLevel::Term,
    };
    DependencyEdge {
        source: decl.source,
        target: decl.target,
        level,
    }
}

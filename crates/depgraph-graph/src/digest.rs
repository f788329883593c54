//! Graph fingerprints for comparing extraction runs.
//!
//! `"fnv1a64:<16 lowercase hex>"`: FNV-1a 64-bit over the compact JSON
//! rendering of the graph. Ids are sorted and dependency lists keep encounter
//! order, so equal graphs always hash equal. Not a security primitive.

use crate::graph::DependencyGraph;

pub const GRAPH_DIGEST_PREFIX: &str = "fnv1a64:";

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

pub fn fnv1a64_digest_bytes(bytes: &[u8]) -> String {
    let hash = bytes
        .iter()
        .fold(FNV_OFFSET_BASIS, |h, &b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME));
    format!("{GRAPH_DIGEST_PREFIX}{hash:016x}")
}

pub fn graph_digest(graph: &DependencyGraph) -> String {
    // String-keyed maps, strings and unit enums always serialize.
    let canonical = serde_json::to_vec(graph).unwrap_or_default();
    fnv1a64_digest_bytes(&canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_has_expected_prefix_and_width() {
        let d = graph_digest(&DependencyGraph::empty());
        assert!(d.starts_with(GRAPH_DIGEST_PREFIX));
        assert_eq!(d.len(), GRAPH_DIGEST_PREFIX.len() + 16);
    }

    #[test]
    fn known_vector() {
        // FNV-1a 64 of the empty input is the offset basis.
        assert_eq!(fnv1a64_digest_bytes(b""), "fnv1a64:cbf29ce484222325");
        assert_eq!(fnv1a64_digest_bytes(b"a"), "fnv1a64:af63dc4c8601ec8c");
    }

    #[test]
    fn content_changes_the_digest() {
        use crate::builder::GraphBuilder;
        use crate::model::{NodeKind, NodeRecord, TermStatus, TypeStatus};

        let build = |fragment: &str| {
            let mut builder = GraphBuilder::new();
            builder
                .add_node(NodeRecord::new("a", NodeKind::Theorem, TypeStatus::Unknown, TermStatus::Unknown))
                .unwrap();
            builder.merge_content("a", fragment).unwrap();
            builder.finalize()
        };
        assert_eq!(graph_digest(&build("<p>x</p>")), graph_digest(&build("<p>x</p>")));
        assert_ne!(graph_digest(&build("<p>x</p>")), graph_digest(&build("<p>y</p>")));
    }
}

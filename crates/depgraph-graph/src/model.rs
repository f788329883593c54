//! Domain types. Serialized names are the stable output contract.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Theorem,
    Definition,
}

/// Progress of a node's statement, from its outline `color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeStatus {
    Stated,
    CanState,
    NotReady,
    Mathlib,
    Unrecognized,
    Unknown,
}

/// Progress of a node's proof or body, from its `fillcolor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TermStatus {
    Proved,
    Defined,
    CanProve,
    FullyProved,
    Unrecognized,
    Unknown,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Theorem => "theorem",
            Self::Definition => "definition",
        }
    }
}

impl TypeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stated => "stated",
            Self::CanState => "can-state",
            Self::NotReady => "not-ready",
            Self::Mathlib => "mathlib",
            Self::Unrecognized => "unrecognized",
            Self::Unknown => "unknown",
        }
    }
}

impl TermStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Proved => "proved",
            Self::Defined => "defined",
            Self::CanProve => "can-prove",
            Self::FullyProved => "fully-proved",
            Self::Unrecognized => "unrecognized",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TypeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TermStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One statement (definition or theorem) of the blueprint.
///
/// The id is the key of the node in its graph and is not repeated in the
/// serialized record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NodeRecord {
    #[serde(skip)]
    pub id: String,
    pub kind: NodeKind,
    pub type_status: TypeStatus,
    pub term_status: TermStatus,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub type_dependencies: Vec<String>,
    #[serde(default)]
    pub term_dependencies: Vec<String>,
}

impl NodeRecord {
    pub fn new(
        id: impl Into<String>,
        kind: NodeKind,
        type_status: TypeStatus,
        term_status: TermStatus,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            type_status,
            term_status,
            content: String::new(),
            type_dependencies: Vec::new(),
            term_dependencies: Vec::new(),
        }
    }

    /// All referenced node ids: type-level first, then term-level.
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.type_dependencies
            .iter()
            .chain(&self.term_dependencies)
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyLevel {
    /// The source's statement needs the target's statement (dashed upstream).
    Type,
    /// The source's proof or body needs the target (solid upstream).
    Term,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub source: String,
    pub target: String,
    pub level: DependencyLevel,
}

impl DependencyEdge {
    pub fn is_type_level(&self) -> bool {
        self.level == DependencyLevel::Type
    }
}

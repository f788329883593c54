use thiserror::Error;

/// The payload as a whole is not a graph we can read.
///
/// Callers decide whether this means "empty graph" or a hard failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("no graph payload found")]
    MissingPayload,
    #[error("payload does not start with `strict digraph \"\" {{` (starts with {found:?})")]
    MissingPrefix { found: String },
    #[error("graph body has no matching closing brace")]
    UnmatchedBrace,
}

/// A single statement does not fit the accepted grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("empty identifier")]
    EmptyId,
    #[error("invalid identifier `{0}`")]
    InvalidId(String),
    #[error("edge chains are not supported")]
    EdgeChain,
    #[error("attribute list is not closed")]
    UnterminatedAttributeList,
    #[error("missing attribute list")]
    MissingAttributeList,
    #[error("unexpected text `{0}` after attribute list")]
    TrailingText(String),
    #[error("expected a bracketed attribute list, found `{0}`")]
    NotAnAttributeList(String),
}

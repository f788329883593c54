use depgraph_dot::{StructuralError, SyntaxError};
use thiserror::Error;

/// Why a graph was rejected. Every kind is fatal for the whole extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("missing shape on node `{id}`")]
    MissingShape { id: String },
    #[error("unknown shape `{shape}` on node `{id}`")]
    UnknownShape { id: String, shape: String },
    #[error("missing label on node `{id}`")]
    MissingLabel { id: String },
    #[error("label `{label}` does not match node id `{id}`")]
    LabelMismatch { id: String, label: String },
    #[error("illegal style `{style}` on node `{id}` (expected `filled`)")]
    IllegalStyle { id: String, style: String },
    #[error("duplicate node id `{id}`")]
    DuplicateNode { id: String },
    #[error("dangling reference: edge `{from}` -> `{to}` refers to unknown node `{missing}`")]
    DanglingReference {
        from: String,
        to: String,
        missing: String,
    },
    #[error("unknown content id `{id}`")]
    UnknownContentId { id: String },
    #[error("unrecognized statement")]
    UnrecognizedStatement,
    #[error("malformed statement: {0}")]
    Syntax(#[from] SyntaxError),
}

/// A [`ValidationErrorKind`] plus the statement text it was raised for, when
/// there is one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}{}", statement_context(.statement))]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub statement: Option<String>,
}

fn statement_context(statement: &Option<String>) -> String {
    match statement {
        Some(text) => format!(" (in statement `{text}`)"),
        None => String::new(),
    }
}

impl ValidationError {
    pub fn with_statement(mut self, statement: &str) -> Self {
        self.statement = Some(statement.to_string());
        self
    }
}

impl From<ValidationErrorKind> for ValidationError {
    fn from(kind: ValidationErrorKind) -> Self {
        Self {
            kind,
            statement: None,
        }
    }
}

impl From<SyntaxError> for ValidationError {
    fn from(err: SyntaxError) -> Self {
        ValidationErrorKind::Syntax(err).into()
    }
}

/// Result of a failed extraction.
///
/// `Structural` means there was no readable graph at all; callers may choose
/// to treat that as an empty graph. `Validation` is never recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("structural error: {0}")]
    Structural(#[from] StructuralError),
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ExtractError {
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Structural(_))
    }

    pub fn validation_kind(&self) -> Option<&ValidationErrorKind> {
        match self {
            Self::Validation(err) => Some(&err.kind),
            Self::Structural(_) => None,
        }
    }
}

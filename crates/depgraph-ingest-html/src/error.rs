use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("modal container has no `id` attribute")]
    MissingId,

    #[error("modal container id `{id}` does not end with `{suffix}`")]
    BadSuffix { id: String, suffix: String },

    #[error("modal container `{id}` has {found} child elements, expected 1")]
    ChildCount { id: String, found: usize },

    #[error("duplicate modal container for node `{id}`")]
    DuplicateId { id: String },

    #[error("modal container `{id}` reduces to an empty node id")]
    EmptyId { id: String },

    #[error("invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },

    #[error("invalid payload pattern: {0}")]
    Pattern(String),
}

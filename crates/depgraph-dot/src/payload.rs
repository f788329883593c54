//! Payload tokenizer: graph body → trimmed statement strings.

use crate::error::StructuralError;
use crate::scan::{matching_close, split_top_level, SplitTopLevel};

/// The only graph header the generator emits.
pub const GRAPH_PREFIX: &str = "strict digraph \"\" {";

const PREVIEW_CHARS: usize = 100;

/// Return the text between the outermost braces of the graph declaration.
pub fn graph_body(payload: &str) -> Result<&str, StructuralError> {
    if !payload.starts_with(GRAPH_PREFIX) {
        return Err(StructuralError::MissingPrefix {
            found: payload.chars().take(PREVIEW_CHARS).collect(),
        });
    }

    let open = GRAPH_PREFIX.len() - 1;
    let close = matching_close(&payload[open..]).ok_or(StructuralError::UnmatchedBrace)?;
    let end = open + close;

    let trailing = payload[end + 1..].trim();
    if !trailing.is_empty() {
        tracing::debug!(trailing = %trailing, "ignoring text after graph body");
    }

    Ok(&payload[open + 1..end])
}

/// Lazily split a graph body into trimmed, non-empty statements in source order.
pub fn statements(body: &str) -> Statements<'_> {
    Statements {
        pieces: split_top_level(body, ';'),
    }
}

/// Locate the graph body and tokenize it in one step.
pub fn tokenize(payload: &str) -> Result<Statements<'_>, StructuralError> {
    graph_body(payload).map(statements)
}

/// Iterator over the statements of a graph body (see [`statements`]).
pub struct Statements<'a> {
    pieces: SplitTopLevel<'a>,
}

impl<'a> Iterator for Statements<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.pieces.by_ref().map(str::trim).find(|s| !s.is_empty())
    }
}

//! Dependency-graph DOT subset
//!
//! The upstream blueprint generator embeds its dependency graph as a single
//! `strict digraph "" { ... }` payload. This crate covers the *syntax* of that
//! payload only:
//! - `payload`: locate the graph body and split it into statements,
//! - `statement`: classify statements as defaults / node / edge,
//! - `attributes`: parse bracketed `key=value` lists.
//!
//! Grammar accepted (the subset the generator emits, not general DOT):
//!
//! ```text
//! graph      := 'strict digraph ""' '{' statement* '}'
//! statement  := defaults | node_stmt | edge_stmt
//! defaults   := ('graph' | 'node' | 'edge') attr_list
//! node_stmt  := id attr_list
//! edge_stmt  := id '->' id attr_list?
//! attr_list  := '[' attr (',' attr)* ']'
//! attr       := key '=' value
//! ```
//!
//! Separators are only honored outside double-quoted strings and at bracket
//! depth zero, so a quoted value may contain `,`, `;`, `]` or `->`.
//! Semantic meaning (node kinds, statuses, dependency levels) lives in
//! `depgraph-graph`.

pub mod attributes;
pub mod error;
pub mod payload;
mod scan;
pub mod statement;

pub use attributes::{parse_attribute_list, unquote, Attributes};
pub use error::{StructuralError, SyntaxError};
pub use payload::{graph_body, statements, tokenize, Statements, GRAPH_PREFIX};
pub use statement::{classify, parse_id, DefaultsTarget, EdgeDecl, NodeDecl, Statement};

//! Statement classifier.
//!
//! Each trimmed statement becomes exactly one [`Statement`]:
//! - `graph [..]`, `node [..]`, `edge [..]` → [`Statement::Defaults`] (rendering only),
//! - anything with an unquoted `->` → [`Statement::Edge`],
//! - anything with an unquoted `[` and `]` → [`Statement::Node`],
//! - everything else → [`Statement::Unrecognized`], left for the caller to
//!   report or reject.

use nom::{
    branch::alt,
    bytes::complete::{is_not, take_while},
    character::complete::{anychar, char as pchar, satisfy},
    combinator::{all_consuming, recognize},
    multi::many0,
    sequence::{delimited, pair},
    IResult,
};
use serde::{Deserialize, Serialize};

use crate::attributes::{parse_attribute_list, Attributes};
use crate::error::SyntaxError;
use crate::scan::{find_top_level, matching_close};

const EDGE_ARROW: &str = "->";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultsTarget {
    Graph,
    Node,
    Edge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDecl {
    pub id: String,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDecl {
    pub source: String,
    pub target: String,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum Statement {
    Defaults { target: DefaultsTarget },
    Node(NodeDecl),
    Edge(EdgeDecl),
    Unrecognized { text: String },
}

/// Classify one trimmed statement.
pub fn classify(text: &str) -> Result<Statement, SyntaxError> {
    let text = text.trim();

    if let Some(target) = defaults_target(text) {
        return Ok(Statement::Defaults { target });
    }

    if let Some(arrow) = find_top_level(text, EDGE_ARROW) {
        return parse_edge(&text[..arrow], &text[arrow + EDGE_ARROW.len()..]).map(Statement::Edge);
    }

    if find_top_level(text, "[").is_some() && find_top_level(text, "]").is_some() {
        return parse_node(text).map(Statement::Node);
    }

    Ok(Statement::Unrecognized {
        text: text.to_string(),
    })
}

fn defaults_target(text: &str) -> Option<DefaultsTarget> {
    [
        ("graph", DefaultsTarget::Graph),
        ("node", DefaultsTarget::Node),
        ("edge", DefaultsTarget::Edge),
    ]
    .into_iter()
    .find_map(|(keyword, target)| {
        text.strip_prefix(keyword)
            .filter(|rest| rest.trim_start().starts_with('['))
            .map(|_| target)
    })
}

fn parse_node(text: &str) -> Result<NodeDecl, SyntaxError> {
    let (head, segment) = split_attribute_segment(text)?;
    let segment = segment.ok_or(SyntaxError::MissingAttributeList)?;
    Ok(NodeDecl {
        id: parse_id(head)?,
        attributes: parse_attribute_list(segment)?,
    })
}

fn parse_edge(source: &str, rest: &str) -> Result<EdgeDecl, SyntaxError> {
    if find_top_level(rest, EDGE_ARROW).is_some() {
        return Err(SyntaxError::EdgeChain);
    }
    let (target, segment) = split_attribute_segment(rest)?;
    let attributes = match segment {
        Some(segment) => parse_attribute_list(segment)?,
        None => Attributes::new(),
    };
    Ok(EdgeDecl {
        source: parse_id(source)?,
        target: parse_id(target)?,
        attributes,
    })
}

/// Split `head [attrs]` into `head` and the bracketed segment, if any.
fn split_attribute_segment(text: &str) -> Result<(&str, Option<&str>), SyntaxError> {
    let Some(open) = find_top_level(text, "[") else {
        return Ok((text, None));
    };
    let close = open
        + matching_close(&text[open..]).ok_or(SyntaxError::UnterminatedAttributeList)?;
    let trailing = text[close + 1..].trim();
    if !trailing.is_empty() {
        return Err(SyntaxError::TrailingText(trailing.to_string()));
    }
    Ok((&text[..open], Some(&text[open..=close])))
}

// ============================================================================
// Identifiers
// ============================================================================

fn double_quoted(input: &str) -> IResult<&str, &str> {
    delimited(
        pchar('"'),
        recognize(many0(alt((
            recognize(pair(pchar('\\'), anychar)),
            is_not("\\\""),
        )))),
        pchar('"'),
    )(input)
}

fn single_quoted(input: &str) -> IResult<&str, &str> {
    delimited(pchar('\''), take_while(|c| c != '\''), pchar('\''))(input)
}

fn bare(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| !c.is_whitespace() && c != '"' && c != '\''),
        take_while(|c: char| !c.is_whitespace()),
    ))(input)
}

/// Parse a node id or edge endpoint, stripping one layer of quotes.
pub fn parse_id(text: &str) -> Result<String, SyntaxError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SyntaxError::EmptyId);
    }
    match all_consuming(alt((double_quoted, single_quoted, bare)))(text) {
        Ok((_, id)) if id.is_empty() => Err(SyntaxError::EmptyId),
        Ok((_, id)) => Ok(id.to_string()),
        Err(_) => Err(SyntaxError::InvalidId(text.to_string())),
    }
}

//! Blueprint document ingestion
//!
//! The blueprint generator writes a single HTML page that carries two things
//! we need:
//! - the graph payload, passed as a template literal to
//!   `.renderDot(`strict digraph "" { ... }`)` inside a `<script>`,
//! - one modal container per node (`<div class="dep-modal-container"
//!   id="<node>_modal">`) wrapping the node's rendered statement.
//!
//! This crate only locates those pieces; it does not interpret the payload.

pub mod error;

use std::collections::BTreeMap;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

pub use error::DocumentError;

/// Literal that marks the script holding the graph payload.
pub const RENDER_DOT_MARKER: &str = ".renderDot(`strict digraph";

const RENDER_DOT_PATTERN: &str = r"\.renderDot\(`([^`]*)`\)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentOptions {
    /// Exact `class` attribute value of a modal container.
    pub modal_class: String,
    /// Suffix every modal container id carries after the node id.
    pub modal_suffix: String,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            modal_class: "dep-modal-container".to_string(),
            modal_suffix: "_modal".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlueprintDocument {
    /// The payload text between the backticks, or `None` if no script has one.
    pub payload: Option<String>,
    /// Node id → outer HTML of the modal container's single child.
    pub content: BTreeMap<String, String>,
}

pub fn load_document(html: &str, options: &DocumentOptions) -> Result<BlueprintDocument, DocumentError> {
    let doc = Html::parse_document(html);
    let payload = find_payload(&doc)?;
    let content = collect_modal_content(&doc, options)?;

    tracing::debug!(
        payload = payload.is_some(),
        modals = content.len(),
        "loaded blueprint document"
    );
    Ok(BlueprintDocument { payload, content })
}

fn selector(text: &str) -> Result<Selector, DocumentError> {
    Selector::parse(text).map_err(|e| DocumentError::Selector {
        selector: text.to_string(),
        message: e.to_string(),
    })
}

/// First script that mentions the marker and has a complete template literal
/// after it wins.
pub fn find_payload(doc: &Html) -> Result<Option<String>, DocumentError> {
    let scripts = selector("script")?;
    let pattern = Regex::new(RENDER_DOT_PATTERN).map_err(|e| DocumentError::Pattern(e.to_string()))?;

    for script in doc.select(&scripts) {
        let text: String = script.text().collect();
        let Some(start) = text.find(RENDER_DOT_MARKER) else {
            continue;
        };
        match pattern.captures(&text[start..]) {
            Some(caps) => return Ok(caps.get(1).map(|m| m.as_str().to_string())),
            None => {
                tracing::warn!(offset = start, "renderDot call without a closing backtick");
            }
        }
    }
    Ok(None)
}

pub fn collect_modal_content(
    doc: &Html,
    options: &DocumentOptions,
) -> Result<BTreeMap<String, String>, DocumentError> {
    let divs = selector("div")?;
    let mut content = BTreeMap::new();

    for div in doc.select(&divs) {
        if div.value().attr("class") != Some(options.modal_class.as_str()) {
            continue;
        }
        let raw_id = div.value().attr("id").ok_or(DocumentError::MissingId)?;
        let id = raw_id
            .strip_suffix(options.modal_suffix.as_str())
            .ok_or_else(|| DocumentError::BadSuffix {
                id: raw_id.to_string(),
                suffix: options.modal_suffix.clone(),
            })?;
        if id.is_empty() {
            return Err(DocumentError::EmptyId {
                id: raw_id.to_string(),
            });
        }

        let children: Vec<ElementRef<'_>> = div.children().filter_map(ElementRef::wrap).collect();
        let [child] = children.as_slice() else {
            return Err(DocumentError::ChildCount {
                id: raw_id.to_string(),
                found: children.len(),
            });
        };

        if content.insert(id.to_string(), child.html()).is_some() {
            return Err(DocumentError::DuplicateId { id: id.to_string() });
        }
        tracing::trace!(node = id, "collected modal content");
    }

    Ok(content)
}

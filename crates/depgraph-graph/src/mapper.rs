//! Node semantic mapper: raw node attributes → [`NodeRecord`].
//!
//! Rules, applied in order:
//! - `shape` (required): `ellipse` → theorem, `box` → definition.
//! - `color` (optional): outline color → [`TypeStatus`]. Unknown colors
//!   (including an empty value) map to `unrecognized`, absence to `unknown`.
//! - `fillcolor` (optional): fill color → [`TermStatus`]. Unknown colors map
//!   to `unrecognized`, absence to `unknown`.
//! - `label` (required): must equal the node id.
//! - `style` (optional): must be `filled` when present.
//!
//! Recognized attributes are consumed; anything left over is ignored.

use depgraph_dot::NodeDecl;

use crate::error::ValidationErrorKind;
use crate::model::{NodeKind, NodeRecord, TermStatus, TypeStatus};

pub const SHAPE_THEOREM: &str = "ellipse";
pub const SHAPE_DEFINITION: &str = "box";
pub const STYLE_FILLED: &str = "filled";

/// Outline colors emitted upstream, by type status.
pub const TYPE_STATUS_COLORS: [(&str, TypeStatus); 4] = [
    ("green", TypeStatus::Stated),
    ("blue", TypeStatus::CanState),
    ("#FFAA33", TypeStatus::NotReady),
    ("darkgreen", TypeStatus::Mathlib),
];

/// Fill colors emitted upstream, by term status.
pub const TERM_STATUS_FILLCOLORS: [(&str, TermStatus); 4] = [
    ("#9CEC8B", TermStatus::Proved),
    ("#B0ECA3", TermStatus::Defined),
    ("#A3D6FF", TermStatus::CanProve),
    ("#1CAC78", TermStatus::FullyProved),
];

pub fn kind_from_shape(shape: &str) -> Option<NodeKind> {
    match shape {
        SHAPE_THEOREM => Some(NodeKind::Theorem),
        SHAPE_DEFINITION => Some(NodeKind::Definition),
        _ => None,
    }
}

pub fn type_status_from_color(color: Option<&str>) -> TypeStatus {
    match color {
        None => TypeStatus::Unknown,
        Some(color) => TYPE_STATUS_COLORS
            .iter()
            .find(|(known, _)| *known == color)
            .map_or(TypeStatus::Unrecognized, |(_, status)| *status),
    }
}

pub fn term_status_from_fillcolor(fillcolor: Option<&str>) -> TermStatus {
    match fillcolor {
        None => TermStatus::Unknown,
        Some(fill) => TERM_STATUS_FILLCOLORS
            .iter()
            .find(|(known, _)| *known == fill)
            .map_or(TermStatus::Unrecognized, |(_, status)| *status),
    }
}

/// Map one node declaration onto its domain record.
pub fn map_node(decl: NodeDecl) -> Result<NodeRecord, ValidationErrorKind> {
    let NodeDecl { id, mut attributes } = decl;

    let shape = attributes
        .take("shape")
        .ok_or_else(|| ValidationErrorKind::MissingShape { id: id.clone() })?;
    let kind = kind_from_shape(&shape).ok_or_else(|| ValidationErrorKind::UnknownShape {
        id: id.clone(),
        shape: shape.clone(),
    })?;

    let color = attributes.take("color");
    let type_status = type_status_from_color(color.as_deref());
    if type_status == TypeStatus::Unrecognized {
        tracing::warn!(node = %id, color = ?color, "unrecognized node color");
    }

    let fillcolor = attributes.take("fillcolor");
    let term_status = term_status_from_fillcolor(fillcolor.as_deref());
    if term_status == TermStatus::Unrecognized {
        tracing::warn!(node = %id, fillcolor = ?fillcolor, "unrecognized node fill color");
    }

    match attributes.take("label") {
        None => return Err(ValidationErrorKind::MissingLabel { id }),
        Some(label) if label != id => return Err(ValidationErrorKind::LabelMismatch { id, label }),
        Some(_) => {}
    }

    if let Some(style) = attributes.take("style") {
        if style != STYLE_FILLED {
            return Err(ValidationErrorKind::IllegalStyle { id, style });
        }
    }

    if !attributes.is_empty() {
        tracing::trace!(
            node = %id,
            ignored = ?attributes.keys().collect::<Vec<_>>(),
            "ignoring presentation-only attributes"
        );
    }

    Ok(NodeRecord::new(id, kind, type_status, term_status))
}

//! Hit testing: point → element lookup.
//!
//! Walks the element list back-to-front (last inserted = topmost) so ties
//! between overlapping elements resolve to the most recently added one.

use crate::id::ElementId;
use crate::model::{Document, ElementKind};

/// Find the topmost `box` whose rectangle contains (px, py), if any.
///
/// This is the containment resolver used to infer parent/child nesting when
/// a non-box element is dropped or moved. Rectangle boundaries are inclusive.
/// Boxes with unparseable width/height have a degenerate rectangle and never
/// match.
#[must_use]
pub fn containing_box(doc: &Document, px: f32, py: f32) -> Option<ElementId> {
    doc.elements
        .iter()
        .rev()
        .find(|el| el.kind == ElementKind::Box && el.rect().contains(px, py))
        .map(|el| el.id)
}

/// Find the topmost element of any kind at (px, py), if any.
///
/// Geometric fallback for the interaction surface's selection hit-test.
/// Elements without parsed dimensions (text flowing to its content) are
/// skipped here — presses on those arrive with a view-resolved target
/// attached to the pointer event instead.
#[must_use]
pub fn element_at(doc: &Document, px: f32, py: f32) -> Option<ElementId> {
    doc.elements
        .iter()
        .rev()
        .find(|el| el.rect().contains(px, py) && el.rect().width > 0.0)
        .map(|el| el.id)
}

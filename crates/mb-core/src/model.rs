//! Element tree model for email-template documents.
//!
//! The document is a flat, ordered collection of elements — insertion order
//! is z-order (later = on top). Nesting is expressed by an optional `parent`
//! back-reference to an enclosing `box` element; the relation is a forest,
//! never a general graph. Positions are canvas-space floats, independent of
//! the display zoom.

use crate::hit;
use crate::id::ElementId;
use crate::style::{StyleMap, px};
use serde::{Deserialize, Serialize};

/// Minimum and maximum display zoom for the canvas.
pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 2.0;

// ─── Element kinds ───────────────────────────────────────────────────────

/// The element kinds that can be placed on the canvas. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    /// Container — the only kind that may act as a parent.
    Box,
    /// Paragraph of body text.
    Text,
    /// Section heading.
    Heading,
    /// Image; `content` holds the source URL.
    Image,
    /// Call-to-action button.
    Button,
    /// Horizontal rule.
    Divider,
}

impl ElementKind {
    /// The string tag carried in the palette drag payload.
    pub fn as_tag(&self) -> &'static str {
        match self {
            ElementKind::Box => "box",
            ElementKind::Text => "text",
            ElementKind::Heading => "heading",
            ElementKind::Image => "image",
            ElementKind::Button => "button",
            ElementKind::Divider => "divider",
        }
    }

    /// Parse a drag payload tag back to a kind.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "box" => Some(ElementKind::Box),
            "text" => Some(ElementKind::Text),
            "heading" => Some(ElementKind::Heading),
            "image" => Some(ElementKind::Image),
            "button" => Some(ElementKind::Button),
            "divider" => Some(ElementKind::Divider),
            _ => None,
        }
    }

    /// Text-bearing kinds size their height from content, so resize and the
    /// property panel never set an explicit height on them.
    pub fn has_intrinsic_height(&self) -> bool {
        matches!(self, ElementKind::Text | ElementKind::Heading)
    }

    /// Kind-specific default style applied at creation.
    pub fn default_style(&self) -> StyleMap {
        match self {
            ElementKind::Box => StyleMap {
                width: Some("200px".into()),
                height: Some("100px".into()),
                background_color: Some("#ffffff".into()),
                border_width: Some("1px".into()),
                border_style: Some("solid".into()),
                border_color: Some("#e5e7eb".into()),
                border_radius: Some("4px".into()),
                padding: Some("16px".into()),
                ..Default::default()
            },
            ElementKind::Text => StyleMap {
                color: Some("#374151".into()),
                font_size: Some("16px".into()),
                font_weight: Some("400".into()),
                line_height: Some("1.5".into()),
                ..Default::default()
            },
            ElementKind::Heading => StyleMap {
                color: Some("#111827".into()),
                font_size: Some("24px".into()),
                font_weight: Some("600".into()),
                line_height: Some("1.2".into()),
                ..Default::default()
            },
            ElementKind::Image => StyleMap {
                width: Some("200px".into()),
                height: Some("auto".into()),
                border_radius: Some("4px".into()),
                overflow: Some("hidden".into()),
                ..Default::default()
            },
            ElementKind::Button => StyleMap {
                background_color: Some("#3b82f6".into()),
                color: Some("#ffffff".into()),
                padding: Some("10px 20px".into()),
                border_radius: Some("4px".into()),
                font_weight: Some("500".into()),
                font_size: Some("16px".into()),
                text_align: Some("center".into()),
                cursor: Some("pointer".into()),
                ..Default::default()
            },
            ElementKind::Divider => StyleMap {
                width: Some("100%".into()),
                height: Some("1px".into()),
                background_color: Some("#e5e7eb".into()),
                margin: Some("16px 0".into()),
                ..Default::default()
            },
        }
    }

    /// Kind-specific default content applied at creation.
    pub fn default_content(&self) -> String {
        match self {
            ElementKind::Text => "This is a paragraph of text. Click to edit.".into(),
            ElementKind::Heading => "This is a heading".into(),
            ElementKind::Button => "Click me".into(),
            ElementKind::Image => {
                "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b\
                 ?auto=format&fit=crop&w=800&q=80"
                    .into()
            }
            ElementKind::Box | ElementKind::Divider => String::new(),
        }
    }
}

// ─── Elements ────────────────────────────────────────────────────────────

/// A single element on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Unique, stable identifier generated at creation.
    pub id: ElementId,

    /// What kind of element this is. Never changes.
    pub kind: ElementKind,

    /// Free-form payload: text body, button label, image URL.
    /// Meaningless for box/divider.
    pub content: String,

    /// Inline style properties.
    pub style: StyleMap,

    /// Canvas-space position, independent of zoom.
    pub x: f32,
    pub y: f32,

    /// Enclosing box, if the element was dropped inside one.
    pub parent: Option<ElementId>,
}

impl Element {
    pub fn new(kind: ElementKind, x: f32, y: f32) -> Self {
        Self {
            id: ElementId::generate(),
            kind,
            content: kind.default_content(),
            style: kind.default_style(),
            x,
            y,
            parent: None,
        }
    }

    /// Axis-aligned rectangle from position + style dimensions.
    /// Width/height that don't parse as `px` contribute 0.
    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.style.width.as_deref().map_or(0.0, crate::style::parse_px),
            height: self.style.height.as_deref().map_or(0.0, crate::style::parse_px),
        }
    }
}

/// Axis-aligned rectangle in canvas space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Point containment, boundaries inclusive.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

// ─── Document ────────────────────────────────────────────────────────────

/// The complete editable document: an ordered element list plus transient
/// UI state (selection, zoom). Insertion order is z-order for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// All elements, back-to-front.
    pub elements: Vec<Element>,

    /// At most one selected element; always references a live element.
    pub selection: Option<ElementId>,

    /// Display-only zoom multiplier. Does not affect stored coordinates.
    pub view_scale: f32,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            selection: None,
            view_scale: 1.0,
        }
    }

    /// Look up an element by id.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    /// The currently selected element, if any.
    pub fn selected(&self) -> Option<&Element> {
        self.selection.and_then(|id| self.get(id))
    }

    /// Direct children of a box, in document (z) order.
    pub fn children_of(&self, id: ElementId) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|el| el.parent == Some(id))
            .map(|el| el.id)
            .collect()
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    /// Create a new element with kind defaults at (x, y) and select it.
    /// Non-box kinds are parented to the box under the drop point, if any.
    pub fn add_element(&mut self, kind: ElementKind, x: f32, y: f32) -> ElementId {
        let mut element = Element::new(kind, x, y);
        if kind != ElementKind::Box {
            element.parent = hit::containing_box(self, x, y);
        }
        let id = element.id;
        log::debug!("add {} {:?} at ({x}, {y}) parent={:?}", id, kind, element.parent);
        self.elements.push(element);
        self.selection = Some(id);
        id
    }

    /// Replace an element's content. No-op for unknown ids.
    pub fn update_content(&mut self, id: ElementId, content: &str) {
        if let Some(el) = self.get_mut(id) {
            el.content = content.to_string();
        }
    }

    /// Merge a style patch into an element. Rounding the corners of an image
    /// implicitly clips it (`overflow: hidden`) so the radius is visible.
    /// No-op for unknown ids.
    pub fn update_style(&mut self, id: ElementId, patch: &StyleMap) {
        if let Some(el) = self.get_mut(id) {
            el.style.merge(patch);
            if el.kind == ElementKind::Image && patch.border_radius.is_some() {
                el.style.overflow = Some("hidden".into());
            }
        }
    }

    /// Move an element to an absolute canvas position. Non-box elements are
    /// re-parented to whichever box now contains the point; boxes are never
    /// re-parented. No-op for unknown ids.
    pub fn move_element(&mut self, id: ElementId, x: f32, y: f32) {
        let Some(el) = self.get(id) else { return };
        let new_parent = if el.kind == ElementKind::Box {
            el.parent
        } else {
            hit::containing_box(self, x, y)
        };
        if let Some(el) = self.get_mut(id) {
            el.x = x;
            el.y = y;
            el.parent = new_parent;
        }
    }

    /// Resize an element to an absolute pixel size, skipping height for
    /// kinds with intrinsic height. No-op for unknown ids.
    pub fn resize_element(&mut self, id: ElementId, width: f32, height: f32) {
        if let Some(el) = self.get_mut(id) {
            el.style.width = Some(px(width));
            if !el.kind.has_intrinsic_height() {
                el.style.height = Some(px(height));
            }
        }
    }

    /// Delete an element together with its direct children. The cascade is
    /// exactly one level: only boxes can parent, and a box never becomes the
    /// child of another box, so direct children are the full dependent set.
    /// Idempotent — deleting an unknown id is a no-op.
    pub fn delete_element(&mut self, id: ElementId) {
        let before = self.elements.len();
        self.elements
            .retain(|el| el.id != id && el.parent != Some(id));
        if self.elements.len() != before {
            log::debug!("delete {} ({} element(s) removed)", id, before - self.elements.len());
        }
        if let Some(sel) = self.selection
            && self.get(sel).is_none()
        {
            self.selection = None;
        }
    }

    /// Duplicate an element 20px down-right of the original and select the
    /// copy. Children are not copied. Returns the new id, or `None` for
    /// unknown ids.
    pub fn duplicate_element(&mut self, id: ElementId) -> Option<ElementId> {
        let source = self.get(id)?;
        let mut copy = source.clone();
        copy.id = ElementId::generate();
        copy.x += 20.0;
        copy.y += 20.0;
        if copy.kind != ElementKind::Box {
            copy.parent = hit::containing_box(self, copy.x, copy.y);
        }
        let new_id = copy.id;
        self.elements.push(copy);
        self.selection = Some(new_id);
        Some(new_id)
    }

    /// Select an element, or pass `None` to clear. Selecting an unknown id
    /// clears the selection rather than leaving a dangling reference.
    pub fn select_element(&mut self, id: Option<ElementId>) {
        self.selection = id.filter(|id| self.get(*id).is_some());
    }

    /// Set the display zoom, clamped to [`MIN_SCALE`, `MAX_SCALE`].
    pub fn set_view_scale(&mut self, scale: f32) {
        self.view_scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_selects_and_assigns_unique_ids() {
        let mut doc = Document::new();
        let a = doc.add_element(ElementKind::Text, 10.0, 10.0);
        let b = doc.add_element(ElementKind::Button, 30.0, 40.0);

        assert_ne!(a, b);
        assert_eq!(doc.elements.len(), 2);
        assert_eq!(doc.selection, Some(b));
    }

    #[test]
    fn kind_defaults_applied() {
        let mut doc = Document::new();
        let id = doc.add_element(ElementKind::Box, 0.0, 0.0);
        let el = doc.get(id).unwrap();

        assert_eq!(el.style.width.as_deref(), Some("200px"));
        assert_eq!(el.style.height.as_deref(), Some("100px"));
        assert_eq!(el.style.background_color.as_deref(), Some("#ffffff"));
        assert_eq!(el.content, "");

        let id = doc.add_element(ElementKind::Heading, 0.0, 0.0);
        let el = doc.get(id).unwrap();
        assert_eq!(el.style.font_size.as_deref(), Some("24px"));
        assert_eq!(el.content, "This is a heading");
    }

    #[test]
    fn drop_inside_box_sets_parent() {
        let mut doc = Document::new();
        let box_id = doc.add_element(ElementKind::Box, 50.0, 50.0);
        // Default box is 200x100, so (100, 100) lands inside it.
        let text_id = doc.add_element(ElementKind::Text, 100.0, 100.0);

        assert_eq!(doc.get(text_id).unwrap().parent, Some(box_id));
        // A box dropped on top of another box stays top-level.
        let box2 = doc.add_element(ElementKind::Box, 100.0, 100.0);
        assert_eq!(doc.get(box2).unwrap().parent, None);
    }

    #[test]
    fn grown_box_captures_later_drops() {
        let mut doc = Document::new();
        let box_id = doc.add_element(ElementKind::Box, 50.0, 50.0);
        doc.update_style(
            box_id,
            &StyleMap {
                width: Some("300px".into()),
                height: Some("200px".into()),
                ..Default::default()
            },
        );
        let text_id = doc.add_element(ElementKind::Text, 100.0, 100.0);
        assert_eq!(doc.get(text_id).unwrap().parent, Some(box_id));
    }

    #[test]
    fn move_reparents_non_box() {
        let mut doc = Document::new();
        let box_id = doc.add_element(ElementKind::Box, 0.0, 0.0);
        let text_id = doc.add_element(ElementKind::Text, 500.0, 500.0);
        assert_eq!(doc.get(text_id).unwrap().parent, None);

        doc.move_element(text_id, 10.0, 10.0);
        assert_eq!(doc.get(text_id).unwrap().parent, Some(box_id));

        doc.move_element(text_id, 900.0, 900.0);
        assert_eq!(doc.get(text_id).unwrap().parent, None);
    }

    #[test]
    fn delete_cascades_one_level() {
        let mut doc = Document::new();
        let box_id = doc.add_element(ElementKind::Box, 0.0, 0.0);
        let child_a = doc.add_element(ElementKind::Text, 10.0, 10.0);
        let child_b = doc.add_element(ElementKind::Button, 20.0, 20.0);
        let outside = doc.add_element(ElementKind::Text, 500.0, 500.0);

        assert_eq!(doc.get(child_a).unwrap().parent, Some(box_id));
        assert_eq!(doc.get(child_b).unwrap().parent, Some(box_id));

        doc.delete_element(box_id);
        assert!(doc.get(box_id).is_none());
        assert!(doc.get(child_a).is_none());
        assert!(doc.get(child_b).is_none());
        assert!(doc.get(outside).is_some());
    }

    #[test]
    fn delete_is_idempotent_and_clears_selection() {
        let mut doc = Document::new();
        let id = doc.add_element(ElementKind::Text, 0.0, 0.0);
        assert_eq!(doc.selection, Some(id));

        doc.delete_element(id);
        assert_eq!(doc.selection, None);
        doc.delete_element(id); // second delete is a no-op
        assert!(doc.elements.is_empty());
    }

    #[test]
    fn selecting_unknown_id_clears() {
        let mut doc = Document::new();
        let id = doc.add_element(ElementKind::Text, 0.0, 0.0);
        doc.delete_element(id);
        doc.select_element(Some(id));
        assert_eq!(doc.selection, None);
    }

    #[test]
    fn image_radius_forces_clipping() {
        let mut doc = Document::new();
        let id = doc.add_element(ElementKind::Image, 0.0, 0.0);
        doc.update_style(
            id,
            &StyleMap {
                border_radius: Some("12px".into()),
                overflow: Some("visible".into()),
                ..Default::default()
            },
        );
        assert_eq!(doc.get(id).unwrap().style.overflow.as_deref(), Some("hidden"));
    }

    #[test]
    fn resize_skips_intrinsic_height() {
        let mut doc = Document::new();
        let text = doc.add_element(ElementKind::Text, 0.0, 0.0);
        doc.resize_element(text, 240.0, 80.0);
        let el = doc.get(text).unwrap();
        assert_eq!(el.style.width.as_deref(), Some("240px"));
        assert_eq!(el.style.height, None);

        let image = doc.add_element(ElementKind::Image, 0.0, 0.0);
        doc.resize_element(image, 240.0, 80.0);
        let el = doc.get(image).unwrap();
        assert_eq!(el.style.height.as_deref(), Some("80px"));
    }

    #[test]
    fn view_scale_clamps() {
        let mut doc = Document::new();
        doc.set_view_scale(5.0);
        assert_eq!(doc.view_scale, MAX_SCALE);
        doc.set_view_scale(0.1);
        assert_eq!(doc.view_scale, MIN_SCALE);
        doc.set_view_scale(1.25);
        assert_eq!(doc.view_scale, 1.25);
    }

    #[test]
    fn duplicate_offsets_and_selects_copy() {
        let mut doc = Document::new();
        let id = doc.add_element(ElementKind::Button, 30.0, 40.0);
        let copy = doc.duplicate_element(id).unwrap();

        assert_ne!(copy, id);
        let el = doc.get(copy).unwrap();
        assert_eq!((el.x, el.y), (50.0, 60.0));
        assert_eq!(doc.selection, Some(copy));
    }

    #[test]
    fn kind_tag_roundtrip() {
        for kind in [
            ElementKind::Box,
            ElementKind::Text,
            ElementKind::Heading,
            ElementKind::Image,
            ElementKind::Button,
            ElementKind::Divider,
        ] {
            assert_eq!(ElementKind::from_tag(kind.as_tag()), Some(kind));
        }
        assert_eq!(ElementKind::from_tag("spacer"), None);
    }
}

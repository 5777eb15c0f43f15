//! Canvas interaction session.
//!
//! Translates normalized input events into model operations through an
//! explicit state machine:
//!
//! ```text
//! Idle → Selected → { Dragging | Resizing } → Selected
//! ```
//!
//! The session goes back to Idle only when a press lands on empty canvas.
//! Pointer-up ends a drag/resize and clears the resize direction; partial
//! moves are kept (there is no mid-gesture rollback). All mutations flow
//! through [`EditOp`] so the model stays the single mutation point and the
//! session itself holds no document state beyond the gesture in progress.

use crate::input::{InputEvent, ResizeDirection};
use crate::viewport::CanvasViewport;
use mb_core::hit::element_at;
use mb_core::id::ElementId;
use mb_core::model::{Document, ElementKind};
use mb_core::style::StyleMap;

/// Smallest width/height a resize gesture may produce, per dragged axis.
pub const MIN_ELEMENT_SIZE: f32 = 20.0;

/// Canvas position used when an element is inserted without a drop point
/// (palette double-click / double-tap): roughly the center of the 600px
/// canvas, minus half a default element width.
pub const DEFAULT_INSERT_X: f32 = 200.0;
pub const DEFAULT_INSERT_Y: f32 = 200.0;

// ─── Edit operations ─────────────────────────────────────────────────────

/// A single model mutation produced by the interaction surface or the
/// property panel. Applying an op with an unknown id is a no-op, matching
/// the model's behavior.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOp {
    Add { kind: ElementKind, x: f32, y: f32 },
    Move { id: ElementId, x: f32, y: f32 },
    Resize { id: ElementId, width: f32, height: f32 },
    SetStyle { id: ElementId, patch: StyleMap },
    SetContent { id: ElementId, content: String },
    Delete { id: ElementId },
    Duplicate { id: ElementId },
    Select { id: Option<ElementId> },
    SetScale { scale: f32 },
}

impl EditOp {
    /// Apply this operation to the document.
    pub fn apply(&self, doc: &mut Document) {
        match self {
            EditOp::Add { kind, x, y } => {
                doc.add_element(*kind, *x, *y);
            }
            EditOp::Move { id, x, y } => doc.move_element(*id, *x, *y),
            EditOp::Resize { id, width, height } => doc.resize_element(*id, *width, *height),
            EditOp::SetStyle { id, patch } => doc.update_style(*id, patch),
            EditOp::SetContent { id, content } => doc.update_content(*id, content),
            EditOp::Delete { id } => doc.delete_element(*id),
            EditOp::Duplicate { id } => {
                doc.duplicate_element(*id);
            }
            EditOp::Select { id } => doc.select_element(*id),
            EditOp::SetScale { scale } => doc.set_view_scale(*scale),
        }
    }
}

// ─── Session state machine ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Selected {
        id: ElementId,
    },
    /// Moving the selected element. `last_*` is the previous pointer
    /// position in client pixels; each move applies the scaled delta.
    Dragging {
        id: ElementId,
        last_x: f32,
        last_y: f32,
    },
    /// Adjusting the selected element from one of its handles. Geometry is
    /// captured at gesture start so the opposite edge stays pinned.
    Resizing {
        id: ElementId,
        direction: ResizeDirection,
        start_x: f32,
        start_y: f32,
        start_w: f32,
        start_h: f32,
        origin_x: f32,
        origin_y: f32,
    },
}

/// Pointer-driven interaction surface over a [`Document`].
///
/// Events arrive in client pixels; the session converts them to canvas
/// space via the viewport transform and `Document::view_scale`, applies the
/// resulting [`EditOp`]s, and returns them for observation.
pub struct CanvasSession {
    pub viewport: CanvasViewport,
    phase: Phase,
}

impl CanvasSession {
    #[must_use]
    pub fn new(viewport: CanvasViewport) -> Self {
        Self {
            viewport,
            phase: Phase::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.phase, Phase::Resizing { .. })
    }

    /// Handle one input event: mutate the document and return the applied ops.
    pub fn handle(&mut self, doc: &mut Document, event: &InputEvent) -> Vec<EditOp> {
        let ops = match event {
            InputEvent::PointerDown {
                x,
                y,
                handle: Some(direction),
                ..
            } => self.begin_resize(doc, *direction, *x, *y),
            InputEvent::PointerDown {
                x,
                y,
                target,
                handle: None,
                ..
            } => self.press(doc, *target, *x, *y),
            InputEvent::PointerMove { x, y, .. } => self.drag(doc, *x, *y),
            InputEvent::PointerUp { .. } => self.release(),
        };
        for op in &ops {
            op.apply(doc);
        }
        ops
    }

    /// External drop from the component palette: add at the drop point.
    pub fn drop_payload(
        &mut self,
        doc: &mut Document,
        kind: ElementKind,
        client_x: f32,
        client_y: f32,
    ) -> Vec<EditOp> {
        let (x, y) = self.viewport.to_canvas(doc.view_scale, client_x, client_y);
        let op = EditOp::Add { kind, x, y };
        op.apply(doc);
        self.sync_selection(doc);
        vec![op]
    }

    /// Palette double-click / double-tap: insert at the default position.
    pub fn insert_default(&mut self, doc: &mut Document, kind: ElementKind) -> Vec<EditOp> {
        let op = EditOp::Add {
            kind,
            x: DEFAULT_INSERT_X,
            y: DEFAULT_INSERT_Y,
        };
        op.apply(doc);
        self.sync_selection(doc);
        vec![op]
    }

    // ─── Transitions ─────────────────────────────────────────────────────

    fn press(&mut self, doc: &Document, target: Option<ElementId>, x: f32, y: f32) -> Vec<EditOp> {
        let (cx, cy) = self.viewport.to_canvas(doc.view_scale, x, y);
        // The view's own target wins; geometric hit-testing covers presses
        // that arrive without one (empty canvas, synthetic events). Stale
        // targets (element deleted mid-gesture) fall through to geometry.
        let hit = target
            .filter(|id| doc.get(*id).is_some())
            .or_else(|| element_at(doc, cx, cy));
        match hit {
            Some(id) if doc.selection == Some(id) => {
                // Press on the already-selected element starts a drag.
                self.phase = Phase::Dragging { id, last_x: x, last_y: y };
                vec![]
            }
            Some(id) => {
                self.phase = Phase::Selected { id };
                vec![EditOp::Select { id: Some(id) }]
            }
            None => {
                log::debug!("press on empty canvas — deselect");
                self.phase = Phase::Idle;
                vec![EditOp::Select { id: None }]
            }
        }
    }

    fn begin_resize(
        &mut self,
        doc: &Document,
        direction: ResizeDirection,
        x: f32,
        y: f32,
    ) -> Vec<EditOp> {
        // Handles only exist on the selected element.
        let Some(id) = doc.selection else { return vec![] };
        let Some(el) = doc.get(id) else { return vec![] };
        let rect = el.rect();
        self.phase = Phase::Resizing {
            id,
            direction,
            start_x: x,
            start_y: y,
            start_w: rect.width,
            start_h: rect.height,
            origin_x: el.x,
            origin_y: el.y,
        };
        vec![]
    }

    fn drag(&mut self, doc: &Document, x: f32, y: f32) -> Vec<EditOp> {
        match self.phase {
            Phase::Dragging { id, last_x, last_y } => {
                let Some(el) = doc.get(id) else {
                    self.phase = Phase::Idle;
                    return vec![];
                };
                let (dx, dy) =
                    self.viewport
                        .delta_to_canvas(doc.view_scale, x - last_x, y - last_y);
                self.phase = Phase::Dragging { id, last_x: x, last_y: y };
                vec![EditOp::Move {
                    id,
                    x: el.x + dx,
                    y: el.y + dy,
                }]
            }
            Phase::Resizing {
                id,
                direction,
                start_x,
                start_y,
                start_w,
                start_h,
                origin_x,
                origin_y,
            } => {
                let Some(el) = doc.get(id) else {
                    self.phase = Phase::Idle;
                    return vec![];
                };
                let (dx, dy) =
                    self.viewport
                        .delta_to_canvas(doc.view_scale, x - start_x, y - start_y);

                let mut width = start_w;
                let mut height = start_h;
                if direction.east() {
                    width = (start_w + dx).max(MIN_ELEMENT_SIZE);
                } else if direction.west() {
                    width = (start_w - dx).max(MIN_ELEMENT_SIZE);
                }
                let intrinsic = el.kind.has_intrinsic_height();
                if !intrinsic {
                    if direction.south() {
                        height = (start_h + dy).max(MIN_ELEMENT_SIZE);
                    } else if direction.north() {
                        height = (start_h - dy).max(MIN_ELEMENT_SIZE);
                    }
                }

                let mut ops = Vec::with_capacity(2);
                // West/north handles pin the opposite edge by shifting the
                // element as it shrinks or grows.
                let new_x = if direction.west() {
                    origin_x + (start_w - width)
                } else {
                    origin_x
                };
                let new_y = if direction.north() && !intrinsic {
                    origin_y + (start_h - height)
                } else {
                    origin_y
                };
                if new_x != el.x || new_y != el.y {
                    ops.push(EditOp::Move { id, x: new_x, y: new_y });
                }
                ops.push(EditOp::Resize { id, width, height });
                ops
            }
            _ => vec![],
        }
    }

    fn release(&mut self) -> Vec<EditOp> {
        match self.phase {
            Phase::Dragging { id, .. } | Phase::Resizing { id, .. } => {
                self.phase = Phase::Selected { id };
            }
            Phase::Idle | Phase::Selected { .. } => {}
        }
        vec![]
    }

    /// Align the session phase with a selection the model just made
    /// (adding an element selects it).
    fn sync_selection(&mut self, doc: &Document) {
        self.phase = match doc.selection {
            Some(id) => Phase::Selected { id },
            None => Phase::Idle,
        };
    }
}

impl Default for CanvasSession {
    fn default() -> Self {
        Self::new(CanvasViewport::default())
    }
}

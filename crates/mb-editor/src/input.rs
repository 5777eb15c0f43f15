//! Input abstraction layer.
//!
//! Normalizes mouse and touch events into a unified `InputEvent` enum
//! consumed by the canvas session. Coordinates are client pixels; the
//! session converts them to canvas space through the viewport transform.

use mb_core::id::ElementId;
use mb_core::model::ElementKind;

/// Modifier key state captured with each pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };
}

/// Which resize handle a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl ResizeDirection {
    /// Parse a handle's compass tag (`"nw"`, `"se"`, ...).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "n" => Some(Self::North),
            "ne" => Some(Self::NorthEast),
            "e" => Some(Self::East),
            "se" => Some(Self::SouthEast),
            "s" => Some(Self::South),
            "sw" => Some(Self::SouthWest),
            "w" => Some(Self::West),
            "nw" => Some(Self::NorthWest),
            _ => None,
        }
    }

    pub fn east(&self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub fn west(&self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    pub fn north(&self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub fn south(&self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }
}

/// A normalized input event from mouse or touch.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Primary button / finger down. `target` is the element the view
    /// resolved from its per-element event bindings — content-sized kinds
    /// (text, heading, dividers with percentage widths) have no canvas-space
    /// rectangle to hit-test, so the view is the authority on what was
    /// pressed. `handle` is set when the press landed on one of the selected
    /// element's resize handles.
    PointerDown {
        x: f32,
        y: f32,
        modifiers: Modifiers,
        target: Option<ElementId>,
        handle: Option<ResizeDirection>,
    },

    /// Pointer moved while down.
    PointerMove { x: f32, y: f32, modifiers: Modifiers },

    /// Pointer released (mouse up, touch end, touch cancel).
    PointerUp { x: f32, y: f32 },
}

/// The inter-element drag-data payload carried from a palette item to the
/// canvas drop target: a single string tag naming the element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPayload {
    pub kind: ElementKind,
}

impl DragPayload {
    /// MIME-style channel name used on the platform drag-data transfer.
    pub const CHANNEL: &'static str = "application/mailblock-type";

    pub fn new(kind: ElementKind) -> Self {
        Self { kind }
    }

    /// The wire value written to the drag-data channel.
    pub fn encode(&self) -> &'static str {
        self.kind.as_tag()
    }

    /// Parse a drop's drag-data value. Unknown tags are ignored (the drop
    /// came from somewhere else).
    pub fn decode(value: &str) -> Option<Self> {
        ElementKind::from_tag(value).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_roundtrip() {
        let payload = DragPayload::new(ElementKind::Heading);
        assert_eq!(DragPayload::decode(payload.encode()), Some(payload));
        assert_eq!(DragPayload::decode("application/pdf"), None);
    }

    #[test]
    fn direction_tags() {
        let nw = ResizeDirection::from_tag("nw").unwrap();
        assert!(nw.north() && nw.west() && !nw.east() && !nw.south());
        assert_eq!(ResizeDirection::from_tag("up"), None);
    }
}

pub mod gesture;
pub mod input;
pub mod panel;
pub mod session;
pub mod viewport;

pub use gesture::{GestureRecognizer, TouchGesture};
pub use input::{DragPayload, InputEvent, Modifiers, ResizeDirection};
pub use panel::{Notice, NoticeKind, PropertyGroup, groups_for};
pub use session::{CanvasSession, EditOp, MIN_ELEMENT_SIZE};
pub use viewport::CanvasViewport;

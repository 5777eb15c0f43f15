pub mod emitter;
pub mod hit;
pub mod id;
pub mod lint;
pub mod model;
pub mod style;

pub use emitter::{EXPORT_FILENAME, element_html, export_document};
pub use hit::{containing_box, element_at};
pub use id::ElementId;
pub use lint::{LintDiagnostic, LintSeverity, lint_document};
pub use model::*;
pub use style::{StyleMap, parse_px, px};

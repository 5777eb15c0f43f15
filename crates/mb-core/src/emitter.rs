//! Emitter: Document → self-contained HTML email template.
//!
//! Walks the element tree depth-first and concatenates tags with inline
//! styles. Top-level elements are ordered by ascending Y then X so the
//! reading order of the export is deterministic regardless of creation
//! order; children keep their box's document (z) order.

use crate::model::{Document, Element, ElementKind};
use std::cmp::Ordering;
use std::fmt::Write;

/// Suggested download name for the export artifact.
pub const EXPORT_FILENAME: &str = "email-template.html";

/// Render a single element (and, for boxes, its nested children) as HTML.
#[must_use]
pub fn element_html(doc: &Document, element: &Element) -> String {
    let css = element.style.to_inline_css();
    match element.kind {
        ElementKind::Box => {
            let mut inner = String::new();
            for child_id in doc.children_of(element.id) {
                if let Some(child) = doc.get(child_id) {
                    inner.push_str(&element_html(doc, child));
                }
            }
            format!("<div style=\"{css}\">{inner}</div>")
        }
        ElementKind::Text => format!("<p style=\"{css}\">{}</p>", element.content),
        ElementKind::Heading => format!("<h2 style=\"{css}\">{}</h2>", element.content),
        ElementKind::Image => {
            format!("<img src=\"{}\" alt=\"Image\" style=\"{css}\" />", element.content)
        }
        ElementKind::Button => format!("<button style=\"{css}\">{}</button>", element.content),
        ElementKind::Divider => format!("<hr style=\"{css}\" />"),
    }
}

/// Emit the whole document as a complete HTML5 page: a single-column,
/// 600px-max table shell for email-client compatibility.
#[must_use]
pub fn export_document(doc: &Document) -> String {
    let mut top_level: Vec<&Element> =
        doc.elements.iter().filter(|el| el.parent.is_none()).collect();
    top_level.sort_by(|a, b| {
        a.y.partial_cmp(&b.y)
            .unwrap_or(Ordering::Equal)
            .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
    });

    log::debug!("export: {} top-level element(s)", top_level.len());

    let mut body = String::with_capacity(1024);
    for (i, el) in top_level.iter().enumerate() {
        if i > 0 {
            body.push('\n');
            body.push_str("        ");
        }
        let _ = write!(body, "{}", element_html(doc, el));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n  \
         <meta charset=\"utf-8\">\n  \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n  \
         <title>Email Template</title>\n\
         </head>\n\
         <body style=\"margin: 0; padding: 0; font-family: Arial, sans-serif;\">\n  \
         <table cellpadding=\"0\" cellspacing=\"0\" width=\"100%\" style=\"max-width: 600px; margin: 0 auto;\">\n    \
         <tr>\n      \
         <td>\n        \
         {body}\n      \
         </td>\n    \
         </tr>\n  \
         </table>\n\
         </body>\n\
         </html>"
    )
}

//! Lint diagnostics for documents.
//!
//! Reports structural issues without modifying the document. Results are
//! advisory — surfaced as panel notices, never hard failures.

use crate::id::ElementId;
use crate::model::{Document, ElementKind};
use crate::style::parse_px;
use std::collections::HashSet;

// ─── Diagnostic types ────────────────────────────────────────────────────

/// Severity of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Should be fixed — likely a mistake.
    Warning,
    /// Informational — style suggestion.
    Info,
}

/// A single lint diagnostic for an element.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// The element this diagnostic refers to.
    pub element_id: ElementId,
    /// Human-readable message.
    pub message: String,
    /// Severity level.
    pub severity: LintSeverity,
    /// Short rule identifier (e.g. "dangling-parent", "empty-image-url").
    pub rule: &'static str,
}

// ─── Public API ───────────────────────────────────────────────────────────

/// Run all lint rules over the document and return diagnostics.
#[must_use]
pub fn lint_document(doc: &Document) -> Vec<LintDiagnostic> {
    let mut diags = Vec::new();
    lint_parent_refs(doc, &mut diags);
    lint_empty_image_urls(doc, &mut diags);
    lint_invisible_boxes(doc, &mut diags);
    diags
}

// ─── Rules ────────────────────────────────────────────────────────────────

/// Warn on parent references that are dangling or point at a non-box.
/// The mutation API never produces these; they can only come from
/// deserialized documents.
fn lint_parent_refs(doc: &Document, diags: &mut Vec<LintDiagnostic>) {
    let boxes: HashSet<ElementId> = doc
        .elements
        .iter()
        .filter(|el| el.kind == ElementKind::Box)
        .map(|el| el.id)
        .collect();
    let live: HashSet<ElementId> = doc.elements.iter().map(|el| el.id).collect();

    for el in &doc.elements {
        let Some(parent) = el.parent else { continue };
        if !live.contains(&parent) {
            diags.push(LintDiagnostic {
                element_id: el.id,
                message: format!("`{}` references deleted parent `{parent}`.", el.id),
                severity: LintSeverity::Warning,
                rule: "dangling-parent",
            });
        } else if !boxes.contains(&parent) {
            diags.push(LintDiagnostic {
                element_id: el.id,
                message: format!(
                    "`{}` is parented to `{parent}`, which is not a box.",
                    el.id
                ),
                severity: LintSeverity::Warning,
                rule: "non-box-parent",
            });
        }
    }
}

/// Warn on images with no source URL — they export as a broken `<img>`.
fn lint_empty_image_urls(doc: &Document, diags: &mut Vec<LintDiagnostic>) {
    for el in &doc.elements {
        if el.kind == ElementKind::Image && el.content.trim().is_empty() {
            diags.push(LintDiagnostic {
                element_id: el.id,
                message: format!("Image `{}` has no source URL.", el.id),
                severity: LintSeverity::Warning,
                rule: "empty-image-url",
            });
        }
    }
}

/// Info when a box's width or height doesn't parse to a positive pixel
/// value — such a box can never contain a dropped element.
fn lint_invisible_boxes(doc: &Document, diags: &mut Vec<LintDiagnostic>) {
    for el in &doc.elements {
        if el.kind != ElementKind::Box {
            continue;
        }
        let w = el.style.width.as_deref().map_or(0.0, parse_px);
        let h = el.style.height.as_deref().map_or(0.0, parse_px);
        if w <= 0.0 || h <= 0.0 {
            diags.push(LintDiagnostic {
                element_id: el.id,
                message: format!(
                    "Box `{}` has no pixel dimensions and cannot contain drops.",
                    el.id
                ),
                severity: LintSeverity::Info,
                rule: "invisible-box",
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;
    use crate::style::StyleMap;

    #[test]
    fn clean_document_has_no_diagnostics() {
        let mut doc = Document::new();
        doc.add_element(ElementKind::Box, 0.0, 0.0);
        doc.add_element(ElementKind::Text, 10.0, 10.0);
        assert!(lint_document(&doc).is_empty());
    }

    #[test]
    fn dangling_parent_is_reported() {
        let mut doc = Document::new();
        let box_id = doc.add_element(ElementKind::Box, 0.0, 0.0);
        let text_id = doc.add_element(ElementKind::Text, 10.0, 10.0);
        // Simulate a corrupt deserialized document.
        doc.elements.retain(|el| el.id != box_id);

        let diags = lint_document(&doc);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].rule, "dangling-parent");
        assert_eq!(diags[0].element_id, text_id);
    }

    #[test]
    fn empty_image_url_is_reported() {
        let mut doc = Document::new();
        let id = doc.add_element(ElementKind::Image, 0.0, 0.0);
        doc.update_content(id, "  ");
        let diags = lint_document(&doc);
        assert!(diags.iter().any(|d| d.rule == "empty-image-url"));
    }

    #[test]
    fn percent_sized_box_is_flagged_invisible() {
        let mut doc = Document::new();
        let id = doc.add_element(ElementKind::Box, 0.0, 0.0);
        doc.update_style(
            id,
            &StyleMap {
                width: Some("100%".into()),
                ..Default::default()
            },
        );
        let diags = lint_document(&doc);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].rule, "invisible-box");
        assert_eq!(diags[0].severity, LintSeverity::Info);
    }
}

//! Build a small template programmatically and print the exported HTML.
//!
//! Run with `RUST_LOG=debug` to watch the mutation log.

use mb_core::model::{Document, ElementKind};
use mb_core::style::StyleMap;
use mb_core::{EXPORT_FILENAME, export_document, lint_document};

fn main() {
    env_logger::init();

    let mut doc = Document::new();

    let hero = doc.add_element(ElementKind::Box, 0.0, 0.0);
    doc.update_style(
        hero,
        &StyleMap {
            width: Some("560px".into()),
            height: Some("240px".into()),
            background_color: Some("#f9fafb".into()),
            ..Default::default()
        },
    );

    let heading = doc.add_element(ElementKind::Heading, 24.0, 24.0);
    doc.update_content(heading, "Welcome aboard");
    let body = doc.add_element(ElementKind::Text, 24.0, 80.0);
    doc.update_content(body, "Thanks for signing up. Here is what happens next.");

    doc.add_element(ElementKind::Divider, 0.0, 260.0);
    let cta = doc.add_element(ElementKind::Button, 24.0, 300.0);
    doc.update_content(cta, "Open your dashboard");

    for diag in lint_document(&doc) {
        eprintln!("lint [{}] {}", diag.rule, diag.message);
    }

    println!("<!-- save as {EXPORT_FILENAME} -->");
    println!("{}", export_document(&doc));
}

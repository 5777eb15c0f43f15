//! Typed style record + inline CSS serializer.
//!
//! Styles are stored as CSS value strings (`"200px"`, `"#ffffff"`) under a
//! fixed set of well-known properties, with a pass-through list for anything
//! the property panel doesn't know about. Serialization order is the declared
//! field order followed by pass-throughs, so equal styles always emit
//! byte-identical `style="…"` attributes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The well-known, panel-editable style properties of an element.
///
/// Every field is an optional CSS value string. Unknown properties live in
/// `extra` and round-trip untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleMap {
    pub width: Option<String>,
    pub height: Option<String>,
    pub background_color: Option<String>,
    pub color: Option<String>,
    pub padding: Option<String>,
    pub margin: Option<String>,
    pub border_radius: Option<String>,
    pub border_width: Option<String>,
    pub border_color: Option<String>,
    pub border_style: Option<String>,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub text_align: Option<String>,
    pub line_height: Option<String>,
    pub letter_spacing: Option<String>,
    pub text_decoration: Option<String>,
    pub opacity: Option<String>,
    pub overflow: Option<String>,
    pub object_fit: Option<String>,
    pub cursor: Option<String>,

    /// Pass-through properties not covered by the typed fields, as
    /// `(hyphenated-name, value)` pairs in insertion order.
    pub extra: SmallVec<[(String, String); 2]>,
}

impl StyleMap {
    /// All typed properties as `(css-name, value)` pairs, in emit order.
    fn entries(&self) -> [(&'static str, &Option<String>); 20] {
        [
            ("width", &self.width),
            ("height", &self.height),
            ("background-color", &self.background_color),
            ("color", &self.color),
            ("padding", &self.padding),
            ("margin", &self.margin),
            ("border-radius", &self.border_radius),
            ("border-width", &self.border_width),
            ("border-color", &self.border_color),
            ("border-style", &self.border_style),
            ("font-size", &self.font_size),
            ("font-weight", &self.font_weight),
            ("text-align", &self.text_align),
            ("line-height", &self.line_height),
            ("letter-spacing", &self.letter_spacing),
            ("text-decoration", &self.text_decoration),
            ("opacity", &self.opacity),
            ("overflow", &self.overflow),
            ("object-fit", &self.object_fit),
            ("cursor", &self.cursor),
        ]
    }

    /// Serialize to an inline CSS declaration string: `prop: value; prop: value;`.
    #[must_use]
    pub fn to_inline_css(&self) -> String {
        let mut decls: Vec<String> = self
            .entries()
            .iter()
            .filter_map(|(name, value)| {
                value.as_ref().map(|v| format!("{name}: {v};"))
            })
            .collect();
        for (name, value) in &self.extra {
            decls.push(format!("{name}: {value};"));
        }
        decls.join(" ")
    }

    /// Merge `patch` into `self`, overwriting only `Some` fields.
    /// Pass-through properties upsert by name.
    pub fn merge(&mut self, patch: &StyleMap) {
        macro_rules! take {
            ($field:ident) => {
                if patch.$field.is_some() {
                    self.$field = patch.$field.clone();
                }
            };
        }
        take!(width);
        take!(height);
        take!(background_color);
        take!(color);
        take!(padding);
        take!(margin);
        take!(border_radius);
        take!(border_width);
        take!(border_color);
        take!(border_style);
        take!(font_size);
        take!(font_weight);
        take!(text_align);
        take!(line_height);
        take!(letter_spacing);
        take!(text_decoration);
        take!(opacity);
        take!(overflow);
        take!(object_fit);
        take!(cursor);

        for (name, value) in &patch.extra {
            if let Some(slot) = self.extra.iter_mut().find(|(n, _)| n == name) {
                slot.1 = value.clone();
            } else {
                self.extra.push((name.clone(), value.clone()));
            }
        }
    }

    /// Set a pass-through property by hyphenated name.
    pub fn set_extra(&mut self, name: &str, value: &str) {
        if let Some(slot) = self.extra.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value.to_string();
        } else {
            self.extra.push((name.to_string(), value.to_string()));
        }
    }
}

/// Format a canvas-space length as a CSS pixel value.
#[must_use]
pub fn px(value: f32) -> String {
    // Emit integers without a trailing ".0" so "200px" stays "200px".
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{value}px")
    }
}

/// Parse a CSS pixel value back to a float. Returns `0.0` for anything that
/// doesn't parse (missing value, `auto`, percentages) — degraded geometry is
/// preferred over a hard failure during interaction.
#[must_use]
pub fn parse_px(value: &str) -> f32 {
    value
        .trim()
        .trim_end_matches("px")
        .parse::<f32>()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inline_css_order_is_deterministic() {
        let mut style = StyleMap {
            color: Some("#374151".into()),
            width: Some("200px".into()),
            font_size: Some("16px".into()),
            ..Default::default()
        };
        style.set_extra("box-shadow", "0 1px 2px rgba(0,0,0,0.1)");

        assert_eq!(
            style.to_inline_css(),
            "width: 200px; color: #374151; font-size: 16px; \
             box-shadow: 0 1px 2px rgba(0,0,0,0.1);"
        );
    }

    #[test]
    fn merge_overwrites_only_some_fields() {
        let mut base = StyleMap {
            width: Some("200px".into()),
            background_color: Some("#ffffff".into()),
            ..Default::default()
        };
        let patch = StyleMap {
            width: Some("300px".into()),
            opacity: Some("0.5".into()),
            ..Default::default()
        };
        base.merge(&patch);

        assert_eq!(base.width.as_deref(), Some("300px"));
        assert_eq!(base.background_color.as_deref(), Some("#ffffff"));
        assert_eq!(base.opacity.as_deref(), Some("0.5"));
    }

    #[test]
    fn merge_upserts_extras() {
        let mut base = StyleMap::default();
        base.set_extra("box-shadow", "none");

        let mut patch = StyleMap::default();
        patch.set_extra("box-shadow", "0 0 4px red");
        patch.set_extra("outline", "none");
        base.merge(&patch);

        assert_eq!(base.extra.len(), 2);
        assert_eq!(base.extra[0], ("box-shadow".to_string(), "0 0 4px red".to_string()));
    }

    #[test]
    fn px_roundtrip() {
        assert_eq!(px(200.0), "200px");
        assert_eq!(px(12.5), "12.5px");
        assert_eq!(parse_px("200px"), 200.0);
        assert_eq!(parse_px(" 12.5px"), 12.5);
    }

    #[test]
    fn parse_px_defaults_to_zero() {
        assert_eq!(parse_px("auto"), 0.0);
        assert_eq!(parse_px("100%"), 0.0);
        assert_eq!(parse_px(""), 0.0);
    }
}

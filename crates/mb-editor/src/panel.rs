//! Property panel glue.
//!
//! Pure view-support layer: which control groups a kind exposes, and the
//! advisory notices shown after user-initiated actions. All writes go back
//! through [`crate::session::EditOp`]; nothing here touches the model.

use mb_core::model::ElementKind;

/// A group of related controls in the properties panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyGroup {
    /// Width, and height unless the kind sizes itself from content.
    Dimensions { height: bool },
    /// Padding and margin.
    Spacing,
    /// Background and text color.
    Colors,
    /// Border width/style/color/radius.
    Border,
    /// Opacity slider.
    Opacity,
    /// Font size/weight, alignment, line height, letter spacing, decoration.
    Typography,
    /// Image URL and object-fit.
    ImageSource,
}

/// The control groups shown for a kind, in panel order.
#[must_use]
pub fn groups_for(kind: ElementKind) -> Vec<PropertyGroup> {
    use PropertyGroup::*;
    let dims = Dimensions {
        height: !kind.has_intrinsic_height(),
    };
    match kind {
        ElementKind::Box => vec![dims, Spacing, Colors, Border, Opacity],
        ElementKind::Text | ElementKind::Heading => {
            vec![dims, Spacing, Colors, Typography, Opacity]
        }
        ElementKind::Image => vec![dims, Spacing, Border, ImageSource, Opacity],
        ElementKind::Button => vec![dims, Spacing, Colors, Border, Typography, Opacity],
        ElementKind::Divider => vec![dims, Spacing, Colors, Opacity],
    }
}

/// Advisory toast shown after a user-initiated action. Purely informational;
/// it never gates the underlying state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

//! Client ↔ canvas coordinate transform.
//!
//! Stored element geometry is canvas-space; pointer events arrive in client
//! pixels. The canvas may be scrolled and zoomed, so:
//!
//! ```text
//! canvas = (client − origin + scroll) / scale
//! ```
//!
//! Pointer *deltas* divide by scale too. The upstream editor only applied
//! the divide on the drop path and moved elements by raw client deltas,
//! which made drags overshoot at zoom-out; here one convention is used
//! everywhere.

/// The canvas element's position and scroll state, in client pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CanvasViewport {
    /// Canvas origin (top-left) in client coordinates.
    pub origin_x: f32,
    pub origin_y: f32,
    /// Current scroll offset of the canvas container.
    pub scroll_x: f32,
    pub scroll_y: f32,
}

impl CanvasViewport {
    /// Convert a client-space point to canvas space under `scale`.
    #[must_use]
    pub fn to_canvas(&self, scale: f32, client_x: f32, client_y: f32) -> (f32, f32) {
        (
            (client_x - self.origin_x + self.scroll_x) / scale,
            (client_y - self.origin_y + self.scroll_y) / scale,
        )
    }

    /// Convert a client-space delta (pointer movement) to canvas space.
    #[must_use]
    pub fn delta_to_canvas(&self, scale: f32, dx: f32, dy: f32) -> (f32, f32) {
        (dx / scale, dy / scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn point_transform_accounts_for_origin_scroll_and_scale() {
        let vp = CanvasViewport {
            origin_x: 100.0,
            origin_y: 50.0,
            scroll_x: 30.0,
            scroll_y: 10.0,
        };
        // client (300, 250) → raw (230, 210) → scaled by 1/2 → (460, 420)
        assert_eq!(vp.to_canvas(0.5, 300.0, 250.0), (460.0, 420.0));
        // At scale 1 the transform is a plain translation.
        assert_eq!(vp.to_canvas(1.0, 300.0, 250.0), (230.0, 210.0));
    }

    #[test]
    fn deltas_scale_like_points() {
        let vp = CanvasViewport::default();
        assert_eq!(vp.delta_to_canvas(2.0, 10.0, -6.0), (5.0, -3.0));
        assert_eq!(vp.delta_to_canvas(0.5, 10.0, -6.0), (20.0, -12.0));
    }
}

//! Touch gesture recognition.
//!
//! Mirrors the mouse path: a short press starts a drag, a held press with no
//! movement arms drag-to-insert from the palette, and a double-tap behaves
//! like a double-click. The recognizer is driven by caller-supplied
//! timestamps (milliseconds), so it needs no clock and tests run instantly.

/// Two taps within this window count as a double-tap.
pub const DOUBLE_TAP_MS: u64 = 300;

/// A press held this long without movement arms palette drag-to-insert.
pub const LONG_PRESS_MS: u64 = 300;

/// Finger travel beyond this distance (client px) counts as movement.
pub const TAP_SLOP: f32 = 10.0;

/// A recognized touch gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchGesture {
    /// Finger down and up quickly without movement.
    Tap,
    /// Second tap within [`DOUBLE_TAP_MS`] of the previous tap's release.
    DoubleTap,
    /// Press held [`LONG_PRESS_MS`] without movement.
    LongPress,
}

/// Per-pointer tap/long-press recognizer.
#[derive(Debug, Default)]
pub struct GestureRecognizer {
    /// Active press: (start time, x, y).
    press: Option<(u64, f32, f32)>,
    /// Whether the active press traveled beyond the slop.
    moved: bool,
    /// Whether the long-press for the active press already fired.
    long_press_fired: bool,
    /// Release time of the last completed tap, for double-tap pairing.
    last_tap: Option<(u64, f32, f32)>,
}

impl GestureRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finger down. Returns `DoubleTap` when this press pairs with the
    /// previous tap.
    pub fn touch_start(&mut self, time_ms: u64, x: f32, y: f32) -> Option<TouchGesture> {
        self.press = Some((time_ms, x, y));
        self.moved = false;
        self.long_press_fired = false;

        if let Some((tap_time, tap_x, tap_y)) = self.last_tap.take()
            && time_ms.saturating_sub(tap_time) <= DOUBLE_TAP_MS
            && within_slop(x - tap_x, y - tap_y)
        {
            return Some(TouchGesture::DoubleTap);
        }
        None
    }

    /// Finger moved. Movement beyond the slop disarms tap and long-press.
    pub fn touch_move(&mut self, _time_ms: u64, x: f32, y: f32) {
        if let Some((_, sx, sy)) = self.press
            && !within_slop(x - sx, y - sy)
        {
            self.moved = true;
        }
    }

    /// Finger up. Returns `Tap` for a short, stationary press.
    pub fn touch_end(&mut self, time_ms: u64, x: f32, y: f32) -> Option<TouchGesture> {
        let (start, ..) = self.press.take()?;
        if self.moved || self.long_press_fired {
            return None;
        }
        if time_ms.saturating_sub(start) < LONG_PRESS_MS {
            self.last_tap = Some((time_ms, x, y));
            return Some(TouchGesture::Tap);
        }
        None
    }

    /// Periodic check while a press is held. Fires `LongPress` exactly once
    /// when the press has been stationary for [`LONG_PRESS_MS`].
    pub fn poll(&mut self, now_ms: u64) -> Option<TouchGesture> {
        let (start, ..) = self.press?;
        if !self.moved
            && !self.long_press_fired
            && now_ms.saturating_sub(start) >= LONG_PRESS_MS
        {
            self.long_press_fired = true;
            return Some(TouchGesture::LongPress);
        }
        None
    }
}

fn within_slop(dx: f32, dy: f32) -> bool {
    dx.abs() <= TAP_SLOP && dy.abs() <= TAP_SLOP
}

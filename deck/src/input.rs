//! Input model: keys, modifiers, wheel/touch payloads, and per-channel gesture state.
//!
//! This module defines the types consumed by [`crate::controller::NavCore`].
//! Payloads are plain data so handlers can be driven with synthetic events.
//! `WheelAccumulator` and `SwipeSession` are the transient state each gesture
//! channel owns between events.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Navigation direction along the slide sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the next slide (scroll down / swipe up).
    Forward,
    /// Towards the previous slide (scroll up / swipe down).
    Backward,
}

impl Direction {
    /// Direction implied by a signed vertical scroll delta (positive = down).
    ///
    /// Returns `None` for a zero delta.
    #[must_use]
    pub fn from_scroll_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::Forward)
        } else if delta < 0.0 {
            Some(Self::Backward)
        } else {
            None
        }
    }

    /// Direction implied by a vertical finger travel (negative = swiped up).
    #[must_use]
    pub fn from_swipe_delta(delta: f64) -> Option<Self> {
        Self::from_scroll_delta(-delta)
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl/Meta wheel is reserved for browser zoom and pinch.
    #[must_use]
    pub fn reserved_for_zoom(self) -> bool {
        self.ctrl || self.meta
    }
}

/// A keyboard key as reported by the browser (`KeyboardEvent.key`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Slide direction bound to this key, if any.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match self.0.as_str() {
            "ArrowRight" | "PageDown" => Some(Direction::Forward),
            "ArrowLeft" | "PageUp" => Some(Direction::Backward),
            _ => None,
        }
    }
}

/// What currently holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Other,
    /// An `<input>`, `<textarea>`, or content-editable element.
    TextEntry,
}

impl Focus {
    /// Classify the focused element from its tag name and editability.
    #[must_use]
    pub fn classify(tag_name: &str, content_editable: bool) -> Self {
        if content_editable || tag_name.eq_ignore_ascii_case("input") || tag_name.eq_ignore_ascii_case("textarea") {
            Self::TextEntry
        } else {
            Self::Other
        }
    }
}

/// Client coordinates of one touch point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One wheel / trackpad sample.
#[derive(Debug, Clone)]
pub struct WheelInput<N> {
    /// Vertical delta in pixels (positive = down).
    pub delta_y: f64,
    pub modifiers: Modifiers,
    pub focus: Focus,
    /// Element under the pointer, used for hijack prevention.
    pub target: Option<N>,
}

/// Running wheel total for the current burst.
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelAccumulator {
    /// Signed sum of deltas since the burst started.
    pub total: f64,
    /// Timestamp of the previous accepted sample.
    pub last_sample_ms: Option<f64>,
    /// Timestamp of the last wheel-triggered navigation.
    pub last_trigger_ms: Option<f64>,
}

impl WheelAccumulator {
    /// Add a sample, starting a new burst when the idle gap exceeds `burst_reset_ms`.
    pub fn push(&mut self, delta: f64, now_ms: f64, burst_reset_ms: f64) {
        let idle = self.last_sample_ms.map_or(true, |last| now_ms - last > burst_reset_ms);
        if idle {
            self.total = 0.0;
        }
        self.total += delta;
        self.last_sample_ms = Some(now_ms);
    }

    /// Whether a trigger at `now_ms` is still inside the post-trigger cool-down.
    #[must_use]
    pub fn cooling_down(&self, now_ms: f64, debounce_ms: f64) -> bool {
        self.last_trigger_ms.is_some_and(|last| now_ms - last < debounce_ms)
    }

    /// Record a triggered navigation and clear the running total.
    pub fn mark_triggered(&mut self, now_ms: f64) {
        self.total = 0.0;
        self.last_trigger_ms = Some(now_ms);
    }
}

/// A single-finger touch being tracked between touch start and touch end.
#[derive(Debug, Clone)]
pub struct SwipeSession<N> {
    /// Where the finger went down.
    pub start: TouchPoint,
    /// Nearest independently scrollable ancestor of the touch target, if any.
    pub scrollable: Option<N>,
}

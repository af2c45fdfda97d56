//! Shared numeric defaults for the deck crate.
//!
//! These are the tuned values behind [`crate::config::NavConfig::default`].
//! Distances are CSS pixels, durations are milliseconds.

// ── Slide resolution ────────────────────────────────────────────

/// Tolerance applied at slide boundaries when resolving the current slide.
pub const SLIDE_EDGE_TOLERANCE_PX: f64 = 20.0;

// ── Wheel / trackpad ────────────────────────────────────────────

/// Idle gap after which the wheel accumulator starts a new burst.
pub const WHEEL_BURST_RESET_MS: f64 = 300.0;

/// Accumulated wheel delta needed to trigger a navigation.
pub const WHEEL_THRESHOLD_PX: f64 = 120.0;

/// Cool-down between two wheel-triggered navigations.
pub const WHEEL_DEBOUNCE_MS: f64 = 500.0;

// ── Touch ───────────────────────────────────────────────────────

/// Vertical travel a swipe must exceed to navigate.
pub const SWIPE_THRESHOLD_PX: f64 = 60.0;

/// Cool-down between two swipe-triggered navigations.
pub const SWIPE_DEBOUNCE_MS: f64 = 300.0;

// ── Header reveal ───────────────────────────────────────────────

/// Delay before the header hides once the pointer leaves the top zone.
pub const HEADER_HIDE_DELAY_MS: f64 = 220.0;

/// Height of the top-of-viewport zone that reveals the header.
pub const HEADER_POINTER_ZONE_PX: f64 = 70.0;

/// Container offset at or above which the header is always shown.
pub const HEADER_TOP_OFFSET_PX: f64 = 10.0;

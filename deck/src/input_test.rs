#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Direction
// =============================================================

#[test]
fn direction_from_scroll_delta_positive_is_forward() {
    assert_eq!(Direction::from_scroll_delta(12.0), Some(Direction::Forward));
}

#[test]
fn direction_from_scroll_delta_negative_is_backward() {
    assert_eq!(Direction::from_scroll_delta(-0.5), Some(Direction::Backward));
}

#[test]
fn direction_from_scroll_delta_zero_is_none() {
    assert_eq!(Direction::from_scroll_delta(0.0), None);
}

#[test]
fn direction_from_swipe_delta_is_inverted() {
    assert_eq!(Direction::from_swipe_delta(-80.0), Some(Direction::Forward));
    assert_eq!(Direction::from_swipe_delta(80.0), Some(Direction::Backward));
}

// =============================================================
// Key
// =============================================================

#[test]
fn key_forward_bindings() {
    assert_eq!(Key("ArrowRight".into()).direction(), Some(Direction::Forward));
    assert_eq!(Key("PageDown".into()).direction(), Some(Direction::Forward));
}

#[test]
fn key_backward_bindings() {
    assert_eq!(Key("ArrowLeft".into()).direction(), Some(Direction::Backward));
    assert_eq!(Key("PageUp".into()).direction(), Some(Direction::Backward));
}

#[test]
fn key_unbound_keys() {
    assert_eq!(Key("ArrowDown".into()).direction(), None);
    assert_eq!(Key("Enter".into()).direction(), None);
    assert_eq!(Key("arrowright".into()).direction(), None);
}

// =============================================================
// Modifiers / Focus
// =============================================================

#[test]
fn modifiers_default_not_reserved() {
    assert!(!Modifiers::default().reserved_for_zoom());
}

#[test]
fn modifiers_ctrl_or_meta_reserved() {
    assert!(Modifiers { ctrl: true, ..Default::default() }.reserved_for_zoom());
    assert!(Modifiers { meta: true, ..Default::default() }.reserved_for_zoom());
    assert!(!Modifiers { shift: true, alt: true, ..Default::default() }.reserved_for_zoom());
}

#[test]
fn focus_classify_text_entry() {
    assert_eq!(Focus::classify("INPUT", false), Focus::TextEntry);
    assert_eq!(Focus::classify("TEXTAREA", false), Focus::TextEntry);
    assert_eq!(Focus::classify("DIV", true), Focus::TextEntry);
}

#[test]
fn focus_classify_other() {
    assert_eq!(Focus::classify("BODY", false), Focus::Other);
    assert_eq!(Focus::classify("BUTTON", false), Focus::Other);
}

// =============================================================
// WheelAccumulator
// =============================================================

#[test]
fn accumulator_sums_within_burst() {
    let mut acc = WheelAccumulator::default();
    acc.push(40.0, 0.0, 300.0);
    acc.push(40.0, 100.0, 300.0);
    acc.push(-10.0, 200.0, 300.0);
    assert_eq!(acc.total, 70.0);
    assert_eq!(acc.last_sample_ms, Some(200.0));
}

#[test]
fn accumulator_resets_after_idle_gap() {
    let mut acc = WheelAccumulator::default();
    acc.push(100.0, 0.0, 300.0);
    acc.push(30.0, 301.0, 300.0);
    assert_eq!(acc.total, 30.0);
}

#[test]
fn accumulator_gap_equal_to_window_keeps_burst() {
    let mut acc = WheelAccumulator::default();
    acc.push(100.0, 0.0, 300.0);
    acc.push(30.0, 300.0, 300.0);
    assert_eq!(acc.total, 130.0);
}

#[test]
fn accumulator_cooldown_window() {
    let mut acc = WheelAccumulator::default();
    assert!(!acc.cooling_down(0.0, 500.0));
    acc.mark_triggered(1_000.0);
    assert_eq!(acc.total, 0.0);
    assert!(acc.cooling_down(1_499.0, 500.0));
    assert!(!acc.cooling_down(1_500.0, 500.0));
}

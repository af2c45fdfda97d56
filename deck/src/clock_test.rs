#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn manual_clock_starts_at_given_time() {
    let clock = ManualClock::new(1_000.0);
    assert_eq!(clock.now_ms(), 1_000.0);
}

#[test]
fn manual_clock_default_is_zero() {
    assert_eq!(ManualClock::default().now_ms(), 0.0);
}

#[test]
fn manual_clock_advance_accumulates() {
    let clock = ManualClock::new(0.0);
    clock.advance(100.0);
    clock.advance(250.0);
    assert_eq!(clock.now_ms(), 350.0);
}

#[test]
fn manual_clock_set_overrides() {
    let clock = ManualClock::new(50.0);
    clock.set(10.0);
    assert_eq!(clock.now_ms(), 10.0);
}

#[test]
fn clock_reference_delegates() {
    let clock = ManualClock::new(42.0);
    let by_ref: &ManualClock = &clock;
    assert_eq!(Clock::now_ms(&by_ref), 42.0);
}

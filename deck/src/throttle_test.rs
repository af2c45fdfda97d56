use super::*;

#[test]
fn first_offer_requests_frame() {
    let mut throttle = FrameThrottle::new();
    assert!(throttle.offer(10));
    assert!(throttle.is_pending());
}

#[test]
fn later_offers_in_same_frame_are_dropped() {
    let mut throttle = FrameThrottle::new();
    throttle.offer(10);
    assert!(!throttle.offer(20));
    assert_eq!(throttle.take(), Some(10));
}

#[test]
fn take_reopens_throttle() {
    let mut throttle = FrameThrottle::new();
    throttle.offer(1);
    throttle.take();
    assert!(!throttle.is_pending());
    assert!(throttle.offer(2));
    assert_eq!(throttle.take(), Some(2));
}

#[test]
fn take_without_offer_is_none() {
    let mut throttle: FrameThrottle<f64> = FrameThrottle::default();
    assert_eq!(throttle.take(), None);
}

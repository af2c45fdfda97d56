//! Slide navigation controller: maps key, wheel, touch, and button input to
//! "move to slide N" actions.
//!
//! `NavCore` holds no browser handles. The host feeds it event payloads plus
//! live [`SlideLayout`] / [`ScrollTree`] views and performs the returned
//! [`Action`]s. Each gesture channel owns its transient state exclusively:
//! the wheel accumulator and the swipe session never interact.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::clock::Clock;
use crate::config::NavConfig;
use crate::input::{Direction, Focus, Key, SwipeSession, TouchPoint, WheelAccumulator, WheelInput};
use crate::layout::{SlideLayout, resolve_current_index};
use crate::scroll::{ScrollTree, nearest_scrollable, region_claims_gesture};

/// Scroll requests returned from input handlers for the host to perform.
///
/// All of them ask for smooth animation; nothing is reported back.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Scroll the navigation container so its offset equals `top`.
    ScrollContainerTo { top: f64 },
    /// Bring slide `index` into view (page-level scrolling).
    ScrollSlideIntoView { index: usize },
    /// Bring the element matching `selector` into view.
    RevealTarget { selector: String },
}

/// Core navigation state, independent of any DOM.
///
/// `N` is the host's element handle, held only while a touch is in flight.
pub struct NavCore<C: Clock, N> {
    pub config: NavConfig,
    clock: C,
    wheel: WheelAccumulator,
    swipe: Option<SwipeSession<N>>,
    last_swipe_ms: Option<f64>,
}

impl<C: Clock, N: Clone> NavCore<C, N> {
    #[must_use]
    pub fn new(config: NavConfig, clock: C) -> Self {
        Self { config, clock, wheel: WheelAccumulator::default(), swipe: None, last_swipe_ms: None }
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    // --- Queries ---

    /// Slide the viewport is currently on, re-read from `layout`.
    #[must_use]
    pub fn current_index(&self, layout: &impl SlideLayout) -> usize {
        resolve_current_index(layout, self.config.edge_tolerance)
    }

    /// Saturating neighbour of the current slide; `None` without slides.
    #[must_use]
    pub fn target_index(&self, layout: &impl SlideLayout, direction: Direction) -> Option<usize> {
        let count = layout.slide_count();
        if count == 0 {
            return None;
        }
        let current = self.current_index(layout).min(count - 1);
        Some(match direction {
            Direction::Forward => (current + 1).min(count - 1),
            Direction::Backward => current.saturating_sub(1),
        })
    }

    /// Running wheel total of the current burst.
    #[must_use]
    pub fn wheel_total(&self) -> f64 {
        self.wheel.total
    }

    /// Whether a touch is being tracked.
    #[must_use]
    pub fn swipe_active(&self) -> bool {
        self.swipe.is_some()
    }

    // --- Navigation ---

    /// Scroll one slide in `direction`, saturating at either end.
    #[must_use]
    pub fn navigate(&self, layout: &impl SlideLayout, direction: Direction) -> Vec<Action> {
        let Some(index) = self.target_index(layout, direction) else {
            return Vec::new();
        };
        let Some(span) = layout.slide_span(index) else {
            return Vec::new();
        };
        log::debug!("deck: {direction:?} -> slide {index}");
        if layout.has_container() {
            vec![Action::ScrollContainerTo { top: span.start }]
        } else {
            vec![Action::ScrollSlideIntoView { index }]
        }
    }

    /// Drop the wheel burst and any in-flight swipe.
    pub fn reset_gestures(&mut self) {
        self.wheel.total = 0.0;
        self.wheel.last_sample_ms = None;
        self.swipe = None;
    }

    // --- Input events ---

    /// Arrow / page keys. Key repeat is left to the platform, so there is no debounce.
    pub fn on_key_down(&mut self, key: &Key, layout: &impl SlideLayout) -> Vec<Action> {
        match key.direction() {
            Some(direction) => self.navigate(layout, direction),
            None => Vec::new(),
        }
    }

    /// Accumulate wheel deltas and navigate once per burst.
    ///
    /// Samples are ignored while typing, while ctrl/meta is held, when a
    /// nested region under the pointer can still scroll that way, and during
    /// the post-trigger cool-down.
    pub fn on_wheel<T: ScrollTree<Node = N>>(
        &mut self,
        input: &WheelInput<N>,
        layout: &impl SlideLayout,
        tree: &T,
    ) -> Vec<Action> {
        if input.focus == Focus::TextEntry || input.modifiers.reserved_for_zoom() {
            return Vec::new();
        }

        if let (Some(direction), Some(target)) = (Direction::from_scroll_delta(input.delta_y), input.target.as_ref()) {
            if let Some(region) = nearest_scrollable(tree, target) {
                if region_claims_gesture(tree, &region, direction) {
                    return Vec::new();
                }
            }
        }

        let now = self.clock.now_ms();
        if self.wheel.cooling_down(now, self.config.wheel_debounce_ms) {
            return Vec::new();
        }

        self.wheel.push(input.delta_y, now, self.config.wheel_burst_reset_ms);
        if self.wheel.total.abs() < self.config.wheel_threshold {
            return Vec::new();
        }

        let direction = if self.wheel.total > 0.0 { Direction::Forward } else { Direction::Backward };
        self.wheel.mark_triggered(now);
        self.navigate(layout, direction)
    }

    /// Start tracking a single-finger touch; multi-touch abandons tracking.
    pub fn on_touch_start<T: ScrollTree<Node = N>>(&mut self, touches: &[TouchPoint], target: Option<&N>, tree: &T) {
        let [start] = touches else {
            self.swipe = None;
            return;
        };
        let scrollable = target.and_then(|node| nearest_scrollable(tree, node));
        self.swipe = Some(SwipeSession { start: *start, scrollable });
    }

    /// Classify the finished touch and navigate on a clear vertical swipe.
    ///
    /// The session is discarded whatever the outcome.
    pub fn on_touch_end<T: ScrollTree<Node = N>>(
        &mut self,
        changed: &[TouchPoint],
        layout: &impl SlideLayout,
        tree: &T,
    ) -> Vec<Action> {
        let Some(session) = self.swipe.take() else {
            return Vec::new();
        };
        let Some(end) = changed.first() else {
            return Vec::new();
        };

        let delta_x = end.x - session.start.x;
        let delta_y = end.y - session.start.y;
        if delta_x.abs() > delta_y.abs() {
            return Vec::new();
        }

        let Some(direction) = Direction::from_swipe_delta(delta_y) else {
            return Vec::new();
        };
        if let Some(region) = session.scrollable.as_ref() {
            if region_claims_gesture(tree, region, direction) {
                return Vec::new();
            }
        }
        if delta_y.abs() <= self.config.swipe_threshold {
            return Vec::new();
        }

        let now = self.clock.now_ms();
        if self.last_swipe_ms.is_some_and(|last| now - last < self.config.swipe_debounce_ms) {
            return Vec::new();
        }
        self.last_swipe_ms = Some(now);
        self.navigate(layout, direction)
    }

    /// Explicit "go to" control: reveal the declared destination directly.
    #[must_use]
    pub fn on_control(&self, selector: &str) -> Vec<Action> {
        let selector = selector.trim();
        if selector.is_empty() {
            return Vec::new();
        }
        vec![Action::RevealTarget { selector: selector.to_owned() }]
    }
}

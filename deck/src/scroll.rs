//! Nested scroll regions and hijack prevention.
//!
//! A gesture that starts over an embedded panel which can still scroll in the
//! gesture's direction belongs to that panel, not to slide navigation.
//! [`ScrollTree`] is the only view of the element tree the controller needs,
//! so the rule can be exercised against an in-memory tree.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::input::Direction;

/// Computed `overflow-y` of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Auto,
    Scroll,
}

impl Overflow {
    /// Parse a CSS `overflow-y` value; unknown values are treated as `visible`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "hidden" | "clip" => Self::Hidden,
            "auto" | "overlay" => Self::Auto,
            "scroll" => Self::Scroll,
            _ => Self::Visible,
        }
    }

    /// Whether the user may scroll content clipped by this overflow mode.
    #[must_use]
    pub fn allows_user_scroll(self) -> bool {
        matches!(self, Self::Auto | Self::Scroll)
    }
}

/// Vertical scroll metrics of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollRoom {
    /// `scrollTop`.
    pub top: f64,
    /// `clientHeight`.
    pub client: f64,
    /// `scrollHeight`.
    pub content: f64,
}

impl ScrollRoom {
    #[must_use]
    pub fn new(top: f64, client: f64, content: f64) -> Self {
        Self { top, client, content }
    }

    /// Whether content overflows the visible box at all.
    #[must_use]
    pub fn overflows(&self) -> bool {
        self.content > self.client
    }

    /// Whether there is unconsumed scroll room in `direction`.
    #[must_use]
    pub fn can_scroll(&self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.top + self.client < self.content,
            Direction::Backward => self.top > 0.0,
        }
    }
}

/// Read-only view of an element tree with overflow and scroll metadata.
pub trait ScrollTree {
    type Node: Clone;

    /// Parent of `node`; `None` once the document body (or root) is reached.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    fn overflow_y(&self, node: &Self::Node) -> Overflow;

    fn scroll_room(&self, node: &Self::Node) -> ScrollRoom;

    /// Whether `node` is the navigation container itself. The search for a
    /// nested region stops there without considering it.
    fn is_boundary(&self, _node: &Self::Node) -> bool {
        false
    }
}

/// Nearest node, starting at `node` itself, that scrolls independently
/// inside the navigation container.
pub fn nearest_scrollable<T: ScrollTree>(tree: &T, node: &T::Node) -> Option<T::Node> {
    let mut current = Some(node.clone());
    while let Some(candidate) = current {
        if tree.is_boundary(&candidate) {
            return None;
        }
        if tree.overflow_y(&candidate).allows_user_scroll() && tree.scroll_room(&candidate).overflows() {
            return Some(candidate);
        }
        current = tree.parent(&candidate);
    }
    None
}

/// Whether a scrollable `region` should keep a gesture heading in `direction`.
pub fn region_claims_gesture<T: ScrollTree>(tree: &T, region: &T::Node, direction: Direction) -> bool {
    tree.scroll_room(region).can_scroll(direction)
}

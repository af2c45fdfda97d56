//! Slide geometry along the scroll axis and current-slide resolution.
//!
//! Layout is never cached: images and fonts can shift slide offsets at any
//! time, so every navigation request re-reads it through [`SlideLayout`].

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Start offset and extent of one slide, in scroll-axis pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideSpan {
    pub start: f64,
    pub extent: f64,
}

impl SlideSpan {
    #[must_use]
    pub fn new(start: f64, extent: f64) -> Self {
        Self { start, extent }
    }

    /// Whether `offset` falls inside this slide, with `tolerance` biasing
    /// towards the slide whose top edge was just crossed.
    #[must_use]
    pub fn contains(&self, offset: f64, tolerance: f64) -> bool {
        offset + tolerance >= self.start && offset < self.start + self.extent - tolerance
    }
}

/// Live view of the ordered slides and the scroll position.
pub trait SlideLayout {
    fn slide_count(&self) -> usize;

    fn slide_span(&self, index: usize) -> Option<SlideSpan>;

    /// Scroll offset of the navigation container, or of the page when there is none.
    fn scroll_offset(&self) -> f64;

    /// Whether slides live in a dedicated scrollable container.
    fn has_container(&self) -> bool;
}

/// Plain-data layout snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticLayout {
    pub spans: Vec<SlideSpan>,
    pub offset: f64,
    pub container: bool,
}

impl StaticLayout {
    /// `count` back-to-back slides of equal `extent`, starting at zero.
    #[must_use]
    pub fn uniform(count: usize, extent: f64) -> Self {
        let spans = (0..count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let start = i as f64 * extent;
                SlideSpan::new(start, extent)
            })
            .collect();
        Self { spans, offset: 0.0, container: true }
    }

    #[must_use]
    pub fn at(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn without_container(mut self) -> Self {
        self.container = false;
        self
    }
}

impl SlideLayout for StaticLayout {
    fn slide_count(&self) -> usize {
        self.spans.len()
    }

    fn slide_span(&self, index: usize) -> Option<SlideSpan> {
        self.spans.get(index).copied()
    }

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn has_container(&self) -> bool {
        self.container
    }
}

/// Index of the slide the viewport is on; `0` when nothing matches or there are no slides.
#[must_use]
pub fn resolve_current_index(layout: &impl SlideLayout, tolerance: f64) -> usize {
    let offset = layout.scroll_offset();
    (0..layout.slide_count())
        .find(|&i| layout.slide_span(i).is_some_and(|span| span.contains(offset, tolerance)))
        .unwrap_or(0)
}

//! One-sample-per-frame throttle for high-rate pointer events.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

/// Holds the first sample offered since the last frame.
///
/// Later samples in the same frame are dropped; the host requests an
/// animation frame only when [`FrameThrottle::offer`] returns `true`.
#[derive(Debug, Clone)]
pub struct FrameThrottle<T> {
    pending: Option<T>,
}

impl<T> Default for FrameThrottle<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> FrameThrottle<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `sample` unless one is already waiting. Returns whether a frame must be requested.
    pub fn offer(&mut self, sample: T) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(sample);
        true
    }

    /// Consume the queued sample on the frame callback.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

//! Auto-hiding page header.
//!
//! The header is shown while the slides container sits at the very top, or
//! while the pointer hovers the top band of the viewport. Leaving the band
//! schedules a delayed hide that a later reveal cancels. The host owns the
//! actual timer and reports its expiry through [`HeaderReveal::fire_hide`].

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use crate::config::NavConfig;

/// What the host should do with the header element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeaderCommand {
    None,
    Show,
    Hide,
    /// Replace any pending hide timer with one firing after `delay_ms`.
    ScheduleHide { delay_ms: f64 },
}

#[derive(Debug, Clone, Copy)]
pub struct HeaderReveal {
    top_offset: f64,
    pointer_zone: f64,
    hide_delay_ms: f64,
    visible: bool,
    hide_pending: bool,
}

impl HeaderReveal {
    #[must_use]
    pub fn new(config: &NavConfig) -> Self {
        Self {
            top_offset: config.header_top_offset,
            pointer_zone: config.header_pointer_zone,
            hide_delay_ms: config.header_hide_delay_ms,
            visible: false,
            hide_pending: false,
        }
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn hide_pending(&self) -> bool {
        self.hide_pending
    }

    /// Container scrolled to `offset`.
    pub fn on_scroll(&mut self, offset: f64) -> HeaderCommand {
        if offset <= self.top_offset {
            self.show()
        } else {
            self.hide()
        }
    }

    /// Pointer moved to `client_y` while the container is at `offset`.
    pub fn on_pointer(&mut self, client_y: f64, offset: f64) -> HeaderCommand {
        if client_y <= self.pointer_zone {
            return self.show();
        }
        if offset > self.top_offset {
            self.hide_pending = true;
            return HeaderCommand::ScheduleHide { delay_ms: self.hide_delay_ms };
        }
        HeaderCommand::None
    }

    /// A touch began while the container is at `offset`.
    pub fn on_touch_start(&mut self, offset: f64) -> HeaderCommand {
        if offset > self.top_offset { self.hide() } else { HeaderCommand::None }
    }

    /// The host's hide timer expired.
    pub fn fire_hide(&mut self) -> HeaderCommand {
        if !self.hide_pending {
            return HeaderCommand::None;
        }
        self.hide()
    }

    fn show(&mut self) -> HeaderCommand {
        self.hide_pending = false;
        self.visible = true;
        HeaderCommand::Show
    }

    fn hide(&mut self) -> HeaderCommand {
        self.hide_pending = false;
        self.visible = false;
        HeaderCommand::Hide
    }
}

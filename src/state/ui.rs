//! Local UI chrome state (settings panel, toast, header).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the stored preference and
//! user records. Provided as one `RwSignal<UiState>` through context.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Scroll offset above which the header may hide.
pub const HEADER_HIDE_OFFSET: f64 = 50.0;

/// A transient toast message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    /// Sequence number of the `show_notice` call that created it.
    pub seq: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub settings_open: bool,
    /// Reset button pressed once; the next press resets.
    pub confirm_reset: bool,
    pub notice: Option<Notice>,
    pub notice_seq: u64,
    pub header_hidden: bool,
    pub last_scroll: f64,
}

impl UiState {
    pub fn open_settings(&mut self) {
        self.settings_open = true;
        self.confirm_reset = false;
    }

    pub fn close_settings(&mut self) {
        self.settings_open = false;
        self.confirm_reset = false;
    }

    /// Show `text`, replacing any current toast. Returns the sequence number
    /// to hand to [`UiState::expire_notice`] later.
    pub fn show_notice(&mut self, text: impl Into<String>) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice { text: text.into(), seq: self.notice_seq });
        self.notice_seq
    }

    /// Hide the toast created by call `seq`, unless a newer one replaced it.
    pub fn expire_notice(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }

    /// Apply a scroll to `offset`.
    pub fn scrolled(&mut self, offset: f64) {
        self.header_hidden = header_hidden(self.last_scroll, offset);
        self.last_scroll = offset;
    }
}

/// Hidden only while scrolling down past the threshold.
#[must_use]
pub fn header_hidden(last: f64, current: f64) -> bool {
    current > HEADER_HIDE_OFFSET && current > last
}

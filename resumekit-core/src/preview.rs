//! Selection tokens for image previews.
//!
//! File reads complete asynchronously and in no guaranteed order. Each
//! selection takes a token; only the completion holding the newest token is
//! displayed.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionToken(u64);

impl SelectionToken {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct PreviewTracker {
    latest: u64,
    shown: Option<u64>,
}

impl PreviewTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new file selection
    pub fn select(&mut self) -> SelectionToken {
        self.latest = self.latest.wrapping_add(1);
        SelectionToken(self.latest)
    }

    /// A read finished. Returns `true` if its result should be displayed.
    pub fn complete(&mut self, token: SelectionToken) -> bool {
        if token.0 != self.latest {
            log::debug!(
                "Discarding stale preview read {} (latest {})",
                token.0,
                self.latest
            );
            return false;
        }
        self.shown = Some(token.0);
        true
    }

    /// Forget pending and displayed selections, e.g. after a reset to default.
    /// Reads still in flight become stale.
    pub fn reset(&mut self) {
        self.latest = self.latest.wrapping_add(1);
        self.shown = None;
    }

    #[must_use]
    pub const fn has_preview(&self) -> bool {
        self.shown.is_some()
    }
}

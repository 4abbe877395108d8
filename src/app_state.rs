//! The core state machine bridging the loaded document and the tracker.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated
//! as the user scrolls. We keep the rendered document lines, the viewport,
//! the tracker, and the per-frame coalescer together here: every scroll key
//! lands in the coalescer as a clamped target position, and the event loop
//! drains it at frame boundaries into exactly one `recompute`.

use crate::frame::Coalescer;
use crate::tracker::{SectionTracker, Viewport};

/// Rows of terminal chrome around the document pane (borders plus the
/// help bar).
const CHROME_ROWS: u16 = 5;

/// Bridges document content, viewport state, and the section tracker.
pub struct AppState {
    /// Rendered document lines, concatenated across loaded files.
    pub lines: Vec<String>,
    /// Owns the sections, links, and active id.
    pub tracker: SectionTracker,
    /// Current visible window over the document.
    pub viewport: Viewport,
    /// Coalesces scroll notifications to one recompute per frame.
    pub coalescer: Coalescer,
}

impl AppState {
    #[must_use]
    /// Initialises application state around a tracker and document lines.
    ///
    /// The viewport starts with zero height; the first resize notification
    /// (sent by the event loop before the first frame) establishes the
    /// real window and triggers the first recompute.
    pub fn new(lines: Vec<String>, tracker: SectionTracker, lookahead: usize) -> Self {
        Self {
            lines,
            tracker,
            viewport: Viewport {
                scroll: 0,
                height: 0,
                lookahead,
            },
            coalescer: Coalescer::default(),
        }
    }

    #[must_use]
    /// Largest scroll position that still fills the viewport where possible.
    pub fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport.height)
    }

    /// Queues a relative scroll, clamped to the document bounds.
    pub fn scroll_by(&mut self, delta: isize) {
        let current = self.pending_or_current();
        let target = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta.unsigned_abs())
        };
        self.scroll_to(target);
    }

    /// Queues an absolute scroll, clamped to the document bounds.
    pub fn scroll_to(&mut self, target: usize) {
        self.coalescer.notify(target.min(self.max_scroll()));
    }

    /// Queues a one-page scroll in the given direction.
    pub fn page_by(&mut self, down: bool) {
        let page = isize::try_from(self.viewport.height).unwrap_or(isize::MAX);
        self.scroll_by(if down { page } else { -page });
    }

    /// Adopts a new terminal size and queues a recompute at the current
    /// position, since a resize changes what intersects the viewport.
    pub fn handle_resize(&mut self, term_rows: u16) {
        self.viewport.height = usize::from(term_rows.saturating_sub(CHROME_ROWS));
        let current = self.pending_or_current().min(self.max_scroll());
        self.coalescer.notify(current);
    }

    /// Applies a coalesced scroll position and recomputes the active
    /// section. Called by the event loop once per frame at most.
    pub fn apply_scroll(&mut self, scroll: usize) {
        self.viewport.scroll = scroll.min(self.max_scroll());
        self.tracker.recompute(self.viewport);
    }

    /// The position scroll arithmetic should build on: the queued target
    /// if one is pending, otherwise the applied scroll. Keying off the
    /// applied value would lose keystrokes that coalesce into one frame.
    fn pending_or_current(&self) -> usize {
        self.coalescer.pending().unwrap_or(self.viewport.scroll)
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;

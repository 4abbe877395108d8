//! The viewport tracker: decides which section is "current" as the user scrolls.
//!
//! The selection rule is a pure reducer over a bounded set: every section's
//! intersection ratio against the (lookahead-extended) viewport window is
//! computed, and the highest ratio wins, with ties broken by document order.
//! Keeping `select_active` free of any UI state means the selection law can
//! be tested directly against coordinate fixtures, while `SectionTracker`
//! layers the stateful parts on top: remembering the last active id when
//! nothing intersects, and rescanning the nav links so that at most one is
//! marked active at any instant.

use crate::nav::NavLink;
use crate::section::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Visible window over the document, in lines.
pub struct Viewport {
    /// First visible document line.
    pub scroll: usize,
    /// Number of visible lines. Zero means the host could not report a
    /// usable size; the tracker treats that as degraded capability.
    pub height: usize,
    /// Extra lines past the bottom edge counted as visible, so a section
    /// becomes current slightly before it enters the window proper.
    pub lookahead: usize,
}

impl Viewport {
    #[must_use]
    /// A viewport with the default lookahead of zero.
    pub fn new(scroll: usize, height: usize) -> Self {
        Self {
            scroll,
            height,
            lookahead: 0,
        }
    }

    /// End of the effective window (exclusive), saturating on overflow.
    fn window_end(self) -> usize {
        self.scroll
            .saturating_add(self.height)
            .saturating_add(self.lookahead)
    }
}

/// Fraction of a section's height inside the effective window, or `None`
/// when the section does not intersect it. Zero-height sections are
/// malformed input and never intersect.
#[allow(clippy::cast_precision_loss)]
fn intersection_ratio(section: &Section, viewport: Viewport) -> Option<f64> {
    if section.height == 0 {
        return None;
    }

    let sec_end = section.top.saturating_add(section.height);
    let start = section.top.max(viewport.scroll);
    let end = sec_end.min(viewport.window_end());
    let overlap = end.saturating_sub(start);

    if overlap == 0 {
        return None;
    }

    Some(overlap as f64 / section.height as f64)
}

#[must_use]
/// Picks the most visible section, if any intersects the viewport.
///
/// Returns the index of the section with the highest intersection ratio.
/// The comparison is strictly-greater, so when two sections tie the one
/// earlier in document order is kept (determinism law).
pub fn select_active(sections: &[Section], viewport: Viewport) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, section) in sections.iter().enumerate() {
        let Some(ratio) = intersection_ratio(section, viewport) else {
            continue;
        };
        if best.is_none_or(|(_, best_ratio)| ratio > best_ratio) {
            best = Some((index, ratio));
        }
    }

    best.map(|(index, _)| index)
}

/// Owns the section and link collections and the single active id.
///
/// Both collections are injected at construction and never grow or shrink;
/// the tracker's only side effect is toggling the links' active flags. The
/// active id survives windows where no section intersects, so the nav pane
/// does not flicker to an empty state while scrolling past trailing
/// whitespace.
pub struct SectionTracker {
    sections: Vec<Section>,
    links: Vec<NavLink>,
    active: Option<String>,
}

impl SectionTracker {
    #[must_use]
    /// Creates a tracker over captured sections and links; nothing is
    /// active until the first `recompute`.
    pub fn new(sections: Vec<Section>, links: Vec<NavLink>) -> Self {
        Self {
            sections,
            links,
            active: None,
        }
    }

    #[must_use]
    /// Sections in document order, as captured at startup.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    /// Navigation links with their current active flags.
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    #[must_use]
    /// Id of the currently active section, if one has been selected yet.
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Recomputes the active section for the given viewport and reflects
    /// it onto the links.
    ///
    /// Empty section or link sets make this a no-op. A zero-height
    /// viewport means the host could not report its size, so every link is
    /// reset to its default visible state instead of being left however
    /// the last recompute put it. When no section intersects, the previous
    /// active id is kept unchanged.
    pub fn recompute(&mut self, viewport: Viewport) {
        if self.sections.is_empty() || self.links.is_empty() {
            return;
        }

        if viewport.height == 0 {
            self.reset_links();
            return;
        }

        if let Some(index) = select_active(&self.sections, viewport) {
            self.active = Some(self.sections[index].id.clone());
        }

        // Full rescan: the link set is small and bounded, so diffing
        // against the previous active link would buy nothing.
        let active = self.active.clone();
        for link in &mut self.links {
            link.active = active.as_deref().is_some_and(|id| link.targets(id));
        }
    }

    /// Puts every link back in its default (inactive, visible) state.
    fn reset_links(&mut self) {
        for link in &mut self.links {
            link.active = false;
        }
    }
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;

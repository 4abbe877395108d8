//! Navigation links and their href-fragment targets.
//!
//! Each link pairs a display label with the id of the section it points at,
//! parsed from an href-like string. Links are captured once at startup and
//! only their active flag changes afterwards, driven by the tracker.

#[derive(Clone, Debug)]
/// UI entry in the navigation pane, associated with at most one section.
pub struct NavLink {
    /// Text shown in the navigation pane.
    pub label: String,
    /// Section id parsed from the href fragment, if the href carried one.
    pub target: Option<String>,
    /// Whether this link is currently highlighted as active.
    pub active: bool,
}

impl NavLink {
    #[must_use]
    /// Builds a link from a display label and an href-like string.
    ///
    /// The target id is everything after the first `#`. An href without a
    /// fragment (or with an empty one) produces a link with no target,
    /// which the tracker will simply never mark active.
    pub fn from_href(label: impl Into<String>, href: &str) -> Self {
        let target = href
            .split_once('#')
            .map(|(_, fragment)| fragment)
            .filter(|fragment| !fragment.is_empty())
            .map(ToString::to_string);

        Self {
            label: label.into(),
            target,
            active: false,
        }
    }

    #[must_use]
    /// Whether this link points at the given section id.
    pub fn targets(&self, id: &str) -> bool {
        self.target.as_deref() == Some(id)
    }
}

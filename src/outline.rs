//! Serialisable outline of the captured sections.
//!
//! The `--outline` flag prints this as JSON instead of launching the TUI,
//! so external tooling can consume the same section coordinates the tracker
//! works from.

use crate::section::Section;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
/// Section coordinates for every loaded document.
pub struct Outline {
    /// One entry per captured section, in document order.
    pub sections: Vec<OutlineEntry>,
}

#[derive(Serialize, Deserialize, Clone)]
/// Coordinates and identity of a single section.
pub struct OutlineEntry {
    /// Slug id targeted by nav links.
    pub id: String,
    /// Heading text.
    pub title: String,
    /// Heading depth.
    pub level: usize,
    /// Line offset of the heading.
    pub top: usize,
    /// Section height in lines.
    pub height: usize,
    /// Source file.
    pub file: String,
}

impl Outline {
    #[must_use]
    /// Captures the outline of a section set.
    pub fn from_sections(sections: &[Section]) -> Self {
        let sections = sections
            .iter()
            .map(|s| OutlineEntry {
                id: s.id.clone(),
                title: s.title.clone(),
                level: s.level,
                top: s.top,
                height: s.height,
                file: s.file_path.clone(),
            })
            .collect();

        Self { sections }
    }
}

//! Section representation for tree-sitter parsed documents.
//!
//! A section is a labeled vertical slice of a document: a heading plus the
//! lines beneath it up to the next heading. Sections carry the coordinates
//! the viewport tracker needs (top offset and height in lines) and a unique
//! slug id that navigation links target via href fragments.

#[derive(Clone, Debug)]
/// Labeled document region with the coordinates used for viewport tracking.
pub struct Section {
    /// Unique slug identifier targeted by nav link href fragments.
    pub id: String,
    /// Heading text without markup symbols.
    pub title: String,
    /// Heading depth (1 for top-level).
    pub level: usize,
    /// Line offset of the heading within the document.
    pub top: usize,
    /// Number of lines from the heading to the next heading or end of file.
    pub height: usize,
    /// Source file containing this section.
    pub file_path: String,
}

#[must_use]
/// Derives a GitHub-style anchor slug from a heading title.
///
/// Lowercases, keeps alphanumerics, and collapses every other run of
/// characters into a single hyphen. Uniqueness across a document is the
/// caller's concern (see `input::extract_sections`).
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.trim().chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

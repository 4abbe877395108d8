//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over different
//! document formats (markdown, org-mode, restructuredtext, etc.) by providing
//! tree-sitter queries specific to each format.

pub mod markdown;

/// Tree-sitter grammar and queries for one document format.
pub trait Format {
    /// The tree-sitter language to parse documents with.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing one node per section heading.
    fn section_query(&self) -> &str;
    /// Node kind of the heading's title text within a section match.
    fn title_kind(&self) -> &str;
    /// Heading depth for a marker node kind, if it is one.
    fn heading_level(&self, marker_kind: &str) -> Option<usize>;
}

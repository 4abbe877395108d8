//! Document discovery and section extraction.
//!
//! This is the page-structure side of the tracker: walk the paths given on
//! the command line for matching files, parse each one with tree-sitter, and
//! capture every heading as a `Section` with its top offset and height in
//! lines. The capture happens once at startup; the tracker never re-reads
//! the document.

use crate::formats::Format;
use crate::section::{slugify, Section};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

/// Collects files matching the configured extensions from paths or
/// directories, in a stable sorted order.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for path in paths {
        if path.is_dir() {
            collect_from_dir(&path, extensions, &mut documents)?;
        } else if matches_extension(&path, extensions) {
            documents.push(path);
        }
    }

    documents.sort();
    Ok(documents)
}

fn collect_from_dir(
    dir: &Path,
    extensions: &[String],
    documents: &mut Vec<PathBuf>,
) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_from_dir(&path, extensions, documents)?;
        } else if matches_extension(&path, extensions) {
            documents.push(path);
        }
    }
    Ok(())
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}

/// Reads a document and extracts its sections.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn extract_sections(path: &Path, format: &dyn Format) -> io::Result<Vec<Section>> {
    let source = fs::read_to_string(path)?;
    sections_from_source(&source, &path.to_string_lossy(), format)
}

/// Extracts sections from in-memory document source.
///
/// Each heading becomes a section whose top is the heading's line offset
/// and whose height runs to the next heading (or end of file). Duplicate
/// heading titles get GitHub-style `-1`, `-2` suffixes so ids stay unique
/// within the document.
///
/// # Errors
///
/// Returns an error if the grammar or query fails to load, which would
/// indicate a broken format implementation rather than bad input.
pub fn sections_from_source(
    source: &str,
    file_path: &str,
    format: &dyn Format,
) -> io::Result<Vec<Section>> {
    let language = format.language();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "parse failed"))?;

    let query = Query::new(&language, format.section_query())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    // (top line, level, title) per heading, in document order.
    let mut headings: Vec<(usize, usize, String)> = Vec::new();

    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());
    while let Some(m) = matches.next() {
        for capture in m.captures {
            let heading = capture.node;
            let top = heading.start_position().row;

            let mut level = 1;
            let mut title = String::new();
            let mut children = heading.walk();
            for child in heading.children(&mut children) {
                if let Some(depth) = format.heading_level(child.kind()) {
                    level = depth;
                } else if child.kind() == format.title_kind() {
                    if let Ok(text) = child.utf8_text(source.as_bytes()) {
                        title = text.trim().to_string();
                    }
                }
            }

            headings.push((top, level, title));
        }
    }

    let total_lines = source.lines().count();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut sections = Vec::with_capacity(headings.len());

    for (i, (top, level, title)) in headings.iter().enumerate() {
        let bottom = headings
            .get(i + 1)
            .map_or(total_lines, |(next_top, _, _)| *next_top);

        let base = slugify(title);
        let id = match seen.get(&base).copied() {
            None => base.clone(),
            Some(n) => format!("{base}-{n}"),
        };
        *seen.entry(base).or_insert(0) += 1;

        sections.push(Section {
            id,
            title: title.clone(),
            level: *level,
            top: *top,
            height: bottom.saturating_sub(*top),
            file_path: file_path.to_string(),
        });
    }

    Ok(sections)
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;

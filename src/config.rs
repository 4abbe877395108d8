//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a scrollspy.toml, and if present we load
//! settings from there. This provides the tracker's lookahead margin, the
//! navigation pane width, and file extension preferences.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from scrollspy.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 5)]
    /// Lines past the viewport bottom counted as visible when tracking.
    pub lookahead: usize,
    #[facet(default = 30)]
    /// Column width of the navigation pane.
    pub nav_width: u16,
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
}

impl Config {
    #[must_use]
    /// Load configuration from scrollspy.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("scrollspy.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}

//! scrollspy: scroll-synced section navigation for markdown documents.
//!
//! The crate splits into a pure tracking core (`section`, `nav`, `tracker`,
//! `frame`) that never touches a terminal, and the glue that feeds it:
//! document discovery and parsing (`input`, `formats`), configuration
//! (`config`), and the ratatui front end (`app_state`, `ui`).
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod formats;
pub mod frame;
pub mod input;
pub mod nav;
pub mod outline;
pub mod section;
pub mod tracker;
pub mod ui;

//! The UI renders the application state into a two-pane layout.
//!
//! The navigation pane lists one entry per link, with the tracker's active
//! link picked out in reversed bold — that highlight is the tracker's only
//! externally visible effect. The document pane shows the slice of lines
//! under the viewport, and a help bar sits along the bottom.

use crate::app_state::AppState;
use crate::config::Config;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Renders the navigation pane, document pane, and help bar.
pub fn draw(f: &mut Frame, app: &AppState, cfg: &Config) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(cfg.nav_width), Constraint::Min(0)])
        .split(rows[0]);

    draw_nav(f, app, panes[0]);
    draw_document(f, app, panes[1]);
    draw_help(f, app, rows[1]);
}

fn draw_nav(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let items: Vec<ListItem> = app
        .tracker
        .links()
        .iter()
        .map(|link| {
            let style = if link.active {
                Style::default()
                    .add_modifier(Modifier::REVERSED)
                    .add_modifier(Modifier::BOLD)
            } else if link.target.is_none() {
                // Dangling links can never activate; dim them slightly.
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(link.label.clone())).style(style)
        })
        .collect();

    let title = format!("Sections ({})", app.tracker.links().len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn draw_document(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let start = app.viewport.scroll.min(app.lines.len());
    let end = start
        .saturating_add(app.viewport.height)
        .min(app.lines.len());

    let visible: Vec<Line> = app.lines[start..end]
        .iter()
        .map(|l| Line::from(l.as_str()))
        .collect();

    let title = format!("Document ({}/{} lines)", end, app.lines.len());
    let body = Paragraph::new(visible).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(body, area);
}

fn draw_help(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let active = app.tracker.active_id().unwrap_or("-");
    let help = format!("Active: {active} | ↑/↓ j/k: Scroll | PgUp/PgDn: Page | g/G: Top/Bottom | q: Quit");
    let widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}

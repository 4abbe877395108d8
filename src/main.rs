//! scrollspy: a section navigator that follows your scroll position.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use scrollspy::{app_state, config, formats, input, nav, outline, section, ui};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Poll timeout when no scroll notification is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "scrollspy")]
#[command(about = "Scroll-synced section navigation for markdown documents", long_about = None)]
struct Args {
    /// Files or directories to view
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Print the section outline as JSON and exit
    #[arg(long)]
    outline: bool,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }

    let documents = input::find_documents(args.paths, &cfg.file_extensions)?;

    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    // Capture page structure once: concatenate documents and shift each
    // file's section tops by the lines that precede it.
    let format = formats::markdown::MarkdownFormat;
    let mut all_sections: Vec<section::Section> = Vec::new();
    let mut lines: Vec<String> = Vec::new();

    for doc in &documents {
        let source = std::fs::read_to_string(doc)?;
        let offset = lines.len();

        let mut sections =
            input::sections_from_source(&source, &doc.to_string_lossy(), &format)?;
        for s in &mut sections {
            s.top += offset;
        }
        all_sections.extend(sections);
        lines.extend(source.lines().map(ToString::to_string));
    }

    if all_sections.is_empty() {
        eprintln!("No sections found in documents");
        return Ok(());
    }

    if args.outline {
        let outline = outline::Outline::from_sections(&all_sections);
        let json = serde_json::to_string_pretty(&outline).map_err(io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    let links = all_sections
        .iter()
        .map(|s| {
            let indent = "  ".repeat(s.level.saturating_sub(1));
            nav::NavLink::from_href(format!("{indent}{}", s.title), &format!("#{}", s.id))
        })
        .collect();

    let tracker = scrollspy::tracker::SectionTracker::new(all_sections, links);
    let state = app_state::AppState::new(lines, tracker, cfg.lookahead);

    run_tui(state, &cfg)
}

fn run_tui(mut app: app_state::AppState, cfg: &config::Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, cfg);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
    cfg: &config::Config,
) -> io::Result<()> {
    // Establish the real viewport before the first frame; until this the
    // tracker is in its degraded zero-height state.
    let size = terminal.size()?;
    app.handle_resize(size.height);

    loop {
        // Frame boundary: at most one recompute, using the most recent
        // coalesced scroll position.
        if let Some(scroll) = app.coalescer.poll(Instant::now()) {
            app.apply_scroll(scroll);
        }

        terminal.draw(|f| ui::draw(f, app, cfg))?;

        let timeout = app
            .coalescer
            .time_until_due(Instant::now())
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
                    KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
                    KeyCode::PageUp => app.page_by(false),
                    KeyCode::PageDown => app.page_by(true),
                    KeyCode::Home | KeyCode::Char('g') => app.scroll_to(0),
                    KeyCode::End | KeyCode::Char('G') => app.scroll_to(usize::MAX),
                    _ => {}
                },
                Event::Resize(_, rows) => app.handle_resize(rows),
                _ => {}
            }
        }
    }
}

use super::AppState;
use crate::nav::NavLink;
use crate::section::Section;
use crate::tracker::SectionTracker;
use std::time::Instant;

fn fixture() -> AppState {
    let sections = vec![
        Section {
            id: "intro".to_string(),
            title: "Intro".to_string(),
            level: 1,
            top: 0,
            height: 40,
            file_path: "page.md".to_string(),
        },
        Section {
            id: "detail".to_string(),
            title: "Detail".to_string(),
            level: 1,
            top: 40,
            height: 60,
            file_path: "page.md".to_string(),
        },
    ];
    let links = vec![
        NavLink::from_href("Intro", "#intro"),
        NavLink::from_href("Detail", "#detail"),
    ];
    let lines = (0..100).map(|i| format!("line {i}")).collect();

    AppState::new(lines, SectionTracker::new(sections, links), 0)
}

#[test]
fn test_resize_queues_recompute() {
    let mut app = fixture();
    assert!(!app.coalescer.is_pending());

    // 25 terminal rows leave 20 for the document pane.
    app.handle_resize(25);
    assert_eq!(app.viewport.height, 20);
    assert!(app.coalescer.is_pending());

    let scroll = app.coalescer.poll(Instant::now()).unwrap();
    app.apply_scroll(scroll);
    assert_eq!(app.tracker.active_id(), Some("intro"));
}

#[test]
fn test_scroll_clamps_to_document() {
    let mut app = fixture();
    app.handle_resize(25);

    app.scroll_to(usize::MAX);
    assert_eq!(app.coalescer.pending(), Some(80), "100 lines - 20 visible");

    app.scroll_by(-1000);
    assert_eq!(app.coalescer.pending(), Some(0));
}

#[test]
fn test_scroll_by_builds_on_pending_target() {
    let mut app = fixture();
    app.handle_resize(25);
    let scroll = app.coalescer.poll(Instant::now()).unwrap();
    app.apply_scroll(scroll);

    // Three keystrokes inside one frame must accumulate, not overwrite.
    app.scroll_by(1);
    app.scroll_by(1);
    app.scroll_by(1);
    assert_eq!(app.coalescer.pending(), Some(3));
}

#[test]
fn test_applied_scroll_moves_active_section() {
    let mut app = fixture();
    app.handle_resize(25);
    let scroll = app.coalescer.poll(Instant::now()).unwrap();
    app.apply_scroll(scroll);
    assert_eq!(app.tracker.active_id(), Some("intro"));

    // Viewport 50..70 sits entirely inside detail.
    app.apply_scroll(50);
    assert_eq!(app.tracker.active_id(), Some("detail"));
    assert!(app.tracker.links()[1].active);
    assert!(!app.tracker.links()[0].active);
}

#[test]
fn test_zero_height_viewport_is_degraded_not_stale() {
    let mut app = fixture();
    app.handle_resize(25);
    let scroll = app.coalescer.poll(Instant::now()).unwrap();
    app.apply_scroll(scroll);
    assert!(app.tracker.links().iter().any(|l| l.active));

    // A terminal too small for any document rows degrades the tracker to
    // its default all-visible state.
    app.handle_resize(3);
    app.apply_scroll(0);
    assert!(app.tracker.links().iter().all(|l| !l.active));
}

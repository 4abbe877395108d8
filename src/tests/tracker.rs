use super::{select_active, SectionTracker, Viewport};
use crate::nav::NavLink;
use crate::section::Section;

fn section(id: &str, top: usize, height: usize) -> Section {
    Section {
        id: id.to_string(),
        title: id.to_string(),
        level: 1,
        top,
        height,
        file_path: "page.md".to_string(),
    }
}

fn link(id: &str) -> NavLink {
    NavLink::from_href(id, &format!("#{id}"))
}

fn active_count(tracker: &SectionTracker) -> usize {
    tracker.links().iter().filter(|l| l.active).count()
}

#[test]
fn test_majority_visible_section_wins() {
    // about covers lines 0..800, work 800..2000; viewport of 600 lines
    // at scroll 900 sits entirely inside work.
    let sections = vec![section("about", 0, 800), section("work", 800, 1200)];
    let links = vec![link("about"), link("work")];
    let mut tracker = SectionTracker::new(sections, links);

    tracker.recompute(Viewport::new(900, 600));

    assert_eq!(tracker.active_id(), Some("work"));
    assert!(tracker.links()[1].active, "#work link should be active");
    assert!(!tracker.links()[0].active, "#about link should be inactive");
}

#[test]
fn test_at_most_one_link_active_across_positions() {
    let sections = vec![
        section("a", 0, 100),
        section("b", 100, 50),
        section("c", 150, 300),
        section("d", 450, 10),
    ];
    let links = vec![link("a"), link("b"), link("c"), link("d")];
    let mut tracker = SectionTracker::new(sections, links);

    for scroll in (0..600).step_by(7) {
        tracker.recompute(Viewport::new(scroll, 40));
        assert!(
            active_count(&tracker) <= 1,
            "more than one active link at scroll {scroll}"
        );
    }
}

#[test]
fn test_tie_prefers_document_order() {
    // Both sections are fully visible, so both ratios are exactly 1.0.
    let sections = vec![section("first", 0, 10), section("second", 10, 10)];
    let viewport = Viewport::new(0, 40);

    assert_eq!(select_active(&sections, viewport), Some(0));
}

#[test]
fn test_recompute_is_idempotent() {
    let sections = vec![section("a", 0, 50), section("b", 50, 50)];
    let links = vec![link("a"), link("b")];
    let mut tracker = SectionTracker::new(sections, links);

    let viewport = Viewport::new(60, 30);
    tracker.recompute(viewport);
    let first = tracker.active_id().map(ToString::to_string);
    let first_flags: Vec<bool> = tracker.links().iter().map(|l| l.active).collect();

    tracker.recompute(viewport);

    assert_eq!(tracker.active_id(), first.as_deref());
    let second_flags: Vec<bool> = tracker.links().iter().map(|l| l.active).collect();
    assert_eq!(first_flags, second_flags);
}

#[test]
fn test_no_intersection_keeps_last_active() {
    let sections = vec![section("a", 0, 100)];
    let links = vec![link("a")];
    let mut tracker = SectionTracker::new(sections, links);

    tracker.recompute(Viewport::new(0, 50));
    assert_eq!(tracker.active_id(), Some("a"));

    // Far beyond every section: the active state must not flicker to none.
    tracker.recompute(Viewport::new(5000, 50));
    assert_eq!(tracker.active_id(), Some("a"));
    assert!(tracker.links()[0].active);
}

#[test]
fn test_select_active_none_when_nothing_intersects() {
    let sections = vec![section("a", 0, 100)];
    assert_eq!(select_active(&sections, Viewport::new(5000, 50)), None);
}

#[test]
fn test_zero_height_section_excluded() {
    let sections = vec![section("empty", 10, 0), section("real", 10, 20)];

    assert_eq!(select_active(&sections, Viewport::new(0, 40)), Some(1));
}

#[test]
fn test_dangling_link_never_active() {
    let sections = vec![section("a", 0, 100)];
    let links = vec![link("a"), NavLink::from_href("elsewhere", "#missing")];
    let mut tracker = SectionTracker::new(sections, links);

    tracker.recompute(Viewport::new(0, 50));

    assert!(tracker.links()[0].active);
    assert!(!tracker.links()[1].active);
}

#[test]
fn test_empty_sets_are_noop() {
    let mut no_sections = SectionTracker::new(vec![], vec![link("a")]);
    no_sections.recompute(Viewport::new(0, 50));
    assert_eq!(no_sections.active_id(), None);

    let mut no_links = SectionTracker::new(vec![section("a", 0, 10)], vec![]);
    no_links.recompute(Viewport::new(0, 50));
    assert_eq!(no_links.active_id(), None);
}

#[test]
fn test_zero_height_viewport_resets_links_to_default() {
    let sections = vec![section("a", 0, 100), section("b", 100, 100)];
    let links = vec![link("a"), link("b")];
    let mut tracker = SectionTracker::new(sections, links);

    tracker.recompute(Viewport::new(0, 50));
    assert_eq!(active_count(&tracker), 1);

    // Degraded capability: no usable viewport, so every link falls back
    // to its default visible state instead of a stale highlight.
    tracker.recompute(Viewport::new(0, 0));
    assert_eq!(active_count(&tracker), 0);
}

#[test]
fn test_lookahead_pulls_next_section_in_early() {
    // Viewport ends at line 100, exactly at b's top; without lookahead b
    // does not intersect, with it b is fully outside but contributes the
    // first few lines.
    let sections = vec![section("a", 0, 100), section("b", 100, 10)];

    let flush = Viewport {
        scroll: 90,
        height: 10,
        lookahead: 0,
    };
    assert_eq!(select_active(&sections, flush), Some(0));

    let eager = Viewport {
        scroll: 90,
        height: 10,
        lookahead: 10,
    };
    // a shows 10/100 lines, b shows 10/10: b wins on ratio.
    assert_eq!(select_active(&sections, eager), Some(1));
}

#[test]
fn test_partial_overlap_ratio_comparison() {
    // Viewport 100..160: a contributes 20 of its 40 lines (0.5), b
    // contributes 40 of its 200 (0.2).
    let sections = vec![section("a", 80, 40), section("b", 120, 200)];

    assert_eq!(select_active(&sections, Viewport::new(100, 60)), Some(0));
}

use super::*;

// =============================================================
// MenuState
// =============================================================

#[test]
fn menu_toggle_locks_body_scroll_while_open() {
    let closed = MenuState::default();
    assert_eq!(closed.body_overflow(), "");
    let open = closed.toggled();
    assert!(open.open);
    assert_eq!(open.body_overflow(), "hidden");
    assert_eq!(open.toggled(), closed);
}

#[test]
fn outside_click_closes_only_open_menu() {
    let open = MenuState { open: true };
    assert!(open.closes_on_click(false));
    assert!(!open.closes_on_click(true));
    assert!(!MenuState::default().closes_on_click(false));
}

#[test]
fn resize_closes_menu_above_breakpoint() {
    let open = MenuState { open: true };
    assert!(open.closes_on_resize(1024.0, 768.0));
    assert!(!open.closes_on_resize(768.0, 768.0));
    assert!(!MenuState::default().closes_on_resize(1024.0, 768.0));
}

#[test]
fn link_target_leaves_room_for_navbar() {
    assert!((link_scroll_target(1500.0, 80.0) - 1420.0).abs() < f64::EPSILON);
}

// =============================================================
// Active markers
// =============================================================

fn id_of(raw: &&str) -> Option<String> {
    raw.strip_prefix('#').map(str::to_owned)
}

#[test]
fn exactly_one_marker_is_active() {
    let links = ["#home", "#about", "#projects", "#contact"];
    let marks = active_markers(&links, "projects", id_of);
    assert_eq!(marks, vec![false, false, true, false]);
}

#[test]
fn duplicate_targets_mark_only_the_first() {
    let links = ["#about", "#about"];
    assert_eq!(active_markers(&links, "about", id_of), vec![true, false]);
}

#[test]
fn unknown_section_clears_every_marker() {
    let links = ["#home", "#about"];
    assert_eq!(active_markers(&links, "blog", id_of), vec![false, false]);
}

#[test]
fn markers_without_ids_are_never_active() {
    let dots: [Option<&str>; 3] = [None, Some("about"), None];
    let marks = active_markers(&dots, "about", |d| d.map(str::to_owned));
    assert_eq!(marks, vec![false, true, false]);
}

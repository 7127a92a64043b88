#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

const VIEWPORT_H: f64 = 800.0;

/// hero and about fit the viewport, projects is tall, contact is short.
fn layout() -> SectionLayout {
    SectionLayout::new(vec![
        SectionBounds::new("hero", 0.0, 800.0),
        SectionBounds::new("about", 800.0, 600.0),
        SectionBounds::new("projects", 1400.0, 2000.0),
        SectionBounds::new("contact", 3400.0, 500.0),
    ])
}

fn desktop(scroll_top: f64) -> Viewport {
    Viewport { scroll_top, width: 1280.0, height: VIEWPORT_H }
}

fn wheel_down() -> Gesture {
    Gesture::Wheel { delta_y: 120.0 }
}

fn wheel_up() -> Gesture {
    Gesture::Wheel { delta_y: -120.0 }
}

fn propose_default(viewport: Viewport, gesture: Gesture) -> Option<SnapTarget> {
    propose(&SnapConfig::default(), &layout(), &viewport, gesture)
}

// =============================================================
// Direction
// =============================================================

#[test]
fn gesture_direction() {
    assert_eq!(wheel_down().direction(), Some(Direction::Down));
    assert_eq!(wheel_up().direction(), Some(Direction::Up));
    assert_eq!(Gesture::Wheel { delta_y: 0.0 }.direction(), None);
    assert_eq!(Gesture::Swipe { start_y: 600.0, end_y: 300.0 }.direction(), Some(Direction::Down));
    assert_eq!(Gesture::Swipe { start_y: 300.0, end_y: 600.0 }.direction(), Some(Direction::Up));
}

// =============================================================
// Edge classification
// =============================================================

#[test]
fn short_section_edges_use_distance() {
    let about = SectionBounds::new("about", 800.0, 600.0);
    let tol = SnapConfig::default().wheel;

    let at_top = edge_state(&about, &desktop(850.0), tol);
    assert!(at_top.at_top);
    assert!(!at_top.at_bottom, "viewport bottom 1650 vs section bottom 1400");

    let at_bottom = edge_state(&about, &desktop(650.0), tol);
    assert!(at_bottom.at_bottom);
}

#[test]
fn tall_section_edges_use_progress() {
    let projects = SectionBounds::new("projects", 1400.0, 2000.0);
    let tol = SnapConfig::default().wheel;

    assert_eq!(edge_state(&projects, &desktop(1440.0), tol), EdgeState { at_top: true, at_bottom: false });
    assert_eq!(edge_state(&projects, &desktop(2000.0), tol), EdgeState { at_top: false, at_bottom: false });
    assert_eq!(edge_state(&projects, &desktop(2560.0), tol), EdgeState { at_top: false, at_bottom: true });
}

#[test]
fn tall_section_progress_never_negative() {
    let projects = SectionBounds::new("projects", 1400.0, 2000.0);
    let state = edge_state(&projects, &desktop(1320.0), SnapConfig::default().wheel);
    assert!(state.at_top);
}

// =============================================================
// Wheel proposals
// =============================================================

#[test]
fn wheel_down_from_short_section_bottom_targets_next_top() {
    let target = propose_default(desktop(0.0), wheel_down()).expect("should snap");
    assert_eq!(target.index, 1);
    assert_eq!(target.scroll_top, 800.0);
    assert_eq!(target.direction, Direction::Down);
}

#[test]
fn wheel_down_mid_tall_section_does_not_snap() {
    assert_eq!(propose_default(desktop(2000.0), wheel_down()), None);
}

#[test]
fn wheel_down_at_tall_section_end_targets_next_top() {
    let target = propose_default(desktop(2600.0), wheel_down()).expect("should snap");
    assert_eq!(target.index, 3);
    assert_eq!(target.scroll_top, 3400.0);
}

#[test]
fn wheel_up_into_short_section_lands_on_its_top() {
    let target = propose_default(desktop(1400.0), wheel_up()).expect("should snap");
    assert_eq!(target.index, 1);
    assert_eq!(target.scroll_top, 800.0);
    assert_eq!(target.direction, Direction::Up);
}

#[test]
fn wheel_up_into_tall_section_lands_on_its_bottom() {
    let target = propose_default(desktop(3400.0), wheel_up()).expect("should snap");
    assert_eq!(target.index, 2);
    assert_eq!(target.scroll_top, 3400.0 - VIEWPORT_H);
}

#[test]
fn wheel_up_in_first_section_does_not_snap() {
    assert_eq!(propose_default(desktop(0.0), wheel_up()), None);
}

#[test]
fn wheel_down_in_last_section_does_not_snap() {
    let layout = SectionLayout::new(vec![SectionBounds::new("a", 0.0, 800.0), SectionBounds::new("b", 800.0, 800.0)]);
    let target = propose(&SnapConfig::default(), &layout, &desktop(800.0), wheel_down());
    assert_eq!(target, None);
}

#[test]
fn wheel_ignored_on_mobile_widths() {
    let narrow = Viewport { scroll_top: 0.0, width: 768.0, height: VIEWPORT_H };
    assert_eq!(propose_default(narrow, wheel_down()), None);
}

#[test]
fn zero_delta_wheel_does_not_snap() {
    assert_eq!(propose_default(desktop(0.0), Gesture::Wheel { delta_y: 0.0 }), None);
}

#[test]
fn no_snap_outside_any_section() {
    assert_eq!(propose_default(desktop(5000.0), wheel_down()), None);
}

// =============================================================
// Swipe proposals
// =============================================================

#[test]
fn short_swipe_is_ignored() {
    let swipe = Gesture::Swipe { start_y: 500.0, end_y: 420.0 };
    assert_eq!(propose_default(desktop(0.0), swipe), None);
}

#[test]
fn swipe_snaps_on_narrow_viewports() {
    let phone = Viewport { scroll_top: 0.0, width: 390.0, height: VIEWPORT_H };
    let swipe = Gesture::Swipe { start_y: 600.0, end_y: 300.0 };
    let target = propose_default(phone, swipe).expect("swipe should snap");
    assert_eq!(target.scroll_top, 800.0);
}

#[test]
fn swipe_tolerance_is_wider_than_wheel() {
    // 120px into the hero: outside the wheel band, inside the touch band.
    assert_eq!(propose_default(desktop(120.0), wheel_down()), None);
    let swipe = Gesture::Swipe { start_y: 600.0, end_y: 300.0 };
    let target = propose_default(desktop(120.0), swipe).expect("touch band is 150px");
    assert_eq!(target.index, 1);
}

#[test]
fn thresholds_are_configurable() {
    let mut config = SnapConfig::default();
    config.wheel.short_edge_px = 150.0;
    let target = propose(&config, &layout(), &desktop(120.0), wheel_down());
    assert!(target.is_some());
}

// =============================================================
// Planner cooldown
// =============================================================

#[test]
fn planner_blocks_snaps_during_cooldown() {
    let layout = layout();
    let mut planner = SnapPlanner::new(SnapConfig::default());

    assert!(planner.plan(&layout, &desktop(0.0), wheel_down(), 0.0).is_some());
    assert!(planner.is_animating(500.0));
    assert_eq!(planner.plan(&layout, &desktop(0.0), wheel_down(), 500.0), None);
    assert!(!planner.is_animating(1000.0));
    assert!(planner.plan(&layout, &desktop(0.0), wheel_down(), 1000.0).is_some());
}

#[test]
fn planner_without_snap_does_not_start_cooldown() {
    let layout = layout();
    let mut planner = SnapPlanner::new(SnapConfig::default());

    assert_eq!(planner.plan(&layout, &desktop(2000.0), wheel_down(), 0.0), None);
    assert!(!planner.is_animating(1.0));
    assert!(planner.plan(&layout, &desktop(0.0), wheel_down(), 1.0).is_some());
}

#[test]
fn planner_guard_applies_to_upward_tall_snaps() {
    let layout = layout();
    let mut planner = SnapPlanner::new(SnapConfig::default());

    assert!(planner.plan(&layout, &desktop(3400.0), wheel_up(), 0.0).is_some());
    assert_eq!(planner.plan(&layout, &desktop(3400.0), wheel_up(), 10.0), None);
}

#[test]
fn planner_cooldown_follows_config() {
    let config = SnapConfig { cooldown_ms: 250.0, ..SnapConfig::default() };
    let mut planner = SnapPlanner::new(config);
    let layout = layout();
    assert!(planner.plan(&layout, &desktop(0.0), wheel_down(), 0.0).is_some());
    assert!(planner.plan(&layout, &desktop(0.0), wheel_down(), 250.0).is_some());
    assert_eq!(planner.config().cooldown_ms, 250.0);
}

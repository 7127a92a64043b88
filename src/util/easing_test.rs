use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn ease_hits_endpoints_and_midpoint() {
    assert!(close(ease_in_out_quad(0.0, 100.0, 400.0, 1000.0), 100.0));
    assert!(close(ease_in_out_quad(500.0, 100.0, 400.0, 1000.0), 300.0));
    assert!(close(ease_in_out_quad(1000.0, 100.0, 400.0, 1000.0), 500.0));
}

#[test]
fn ease_is_slow_at_the_edges() {
    let early = ease_in_out_quad(100.0, 0.0, 1000.0, 1000.0);
    let late = ease_in_out_quad(900.0, 0.0, 1000.0, 1000.0);
    assert!(early < 100.0);
    assert!(late > 900.0);
}

#[test]
fn ease_zero_duration_jumps_to_end() {
    assert!(close(ease_in_out_quad(0.0, 10.0, 90.0, 0.0), 100.0));
}

#[test]
fn tween_moves_upward_too() {
    let tween = ScrollTween::new(800.0, 200.0, 1000.0);
    assert!(close(tween.distance, -600.0));
    assert!(close(tween.position_at(500.0), 500.0));
    assert!(close(tween.position_at(1000.0), 200.0));
}

#[test]
fn tween_clamps_past_duration() {
    let tween = ScrollTween::new(0.0, 500.0, 1000.0);
    assert!(close(tween.position_at(1_250.0), 500.0));
    assert!(close(tween.position_at(-10.0), 0.0));
    assert!(tween.is_running(999.0));
    assert!(!tween.is_running(1000.0));
}

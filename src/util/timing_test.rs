use super::*;

// =============================================================
// Debouncer
// =============================================================

#[test]
fn debounce_collapses_burst_into_one_trailing_call() {
    let mut gate = Debouncer::new(100.0);
    gate.call(0.0, 1);
    gate.call(30.0, 2);
    gate.call(60.0, 3);

    assert_eq!(gate.poll(100.0), None, "deadline moved with the last call");
    assert_eq!(gate.poll(159.0), None);
    assert_eq!(gate.poll(160.0), Some(3));
    assert_eq!(gate.poll(500.0), None, "fires exactly once");
}

#[test]
fn debounce_separate_bursts_fire_separately() {
    let mut gate = Debouncer::new(50.0);
    gate.call(0.0, "a");
    assert_eq!(gate.poll(50.0), Some("a"));
    gate.call(200.0, "b");
    assert!(gate.is_pending());
    assert_eq!(gate.poll(249.0), None);
    assert_eq!(gate.poll(250.0), Some("b"));
    assert!(!gate.is_pending());
}

#[test]
fn debounce_early_poll_reports_remaining_wait() {
    let mut gate = Debouncer::new(100.0);
    assert_eq!(gate.remaining_ms(0.0), None);
    gate.call(0.0, 'x');
    gate.call(40.0, 'y');

    // A timer armed at the first call wakes at 100, before the moved deadline.
    assert_eq!(gate.poll(100.0), None);
    assert_eq!(gate.remaining_ms(100.0), Some(40.0));
    assert_eq!(gate.poll(140.0), Some('y'));
    assert_eq!(gate.remaining_ms(140.0), None);
}

#[test]
fn debounce_remaining_never_negative() {
    let mut gate = Debouncer::new(10.0);
    gate.call(0.0, ());
    assert_eq!(gate.remaining_ms(50.0), Some(0.0));
}

#[test]
fn debounce_poll_without_call_is_empty() {
    let mut gate: Debouncer<()> = Debouncer::new(10.0);
    assert_eq!(gate.poll(1_000.0), None);
}

// =============================================================
// Throttle
// =============================================================

#[test]
fn throttle_runs_leading_call_only_within_window() {
    let mut gate = Throttle::new(16.0);
    let admitted = [0.0, 4.0, 8.0, 15.9]
        .into_iter()
        .filter(|t| gate.admit(*t))
        .count();
    assert_eq!(admitted, 1);
}

#[test]
fn throttle_reopens_after_limit() {
    let mut gate = Throttle::new(16.0);
    assert!(gate.admit(0.0));
    assert!(!gate.admit(10.0));
    assert!(gate.admit(16.0));
    assert!(!gate.admit(20.0));
    assert!(gate.admit(40.0));
}

#[test]
fn throttle_window_starts_at_admitted_call() {
    let mut gate = Throttle::new(100.0);
    assert!(gate.admit(50.0));
    assert!(!gate.admit(149.0));
    assert!(gate.admit(150.0));
}

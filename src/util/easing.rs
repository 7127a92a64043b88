//! Eased scroll animation.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

/// Quadratic ease-in-out: value at time `t` of a move from `start` by
/// `change` over `duration`.
#[must_use]
pub fn ease_in_out_quad(t: f64, start: f64, change: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return start + change;
    }
    let mut t = t / (duration / 2.0);
    if t < 1.0 {
        return change / 2.0 * t * t + start;
    }
    t -= 1.0;
    -change / 2.0 * (t * (t - 2.0) - 1.0) + start
}

/// A single programmatic scroll from the current offset to a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTween {
    pub start: f64,
    pub distance: f64,
    pub duration_ms: f64,
}

impl ScrollTween {
    #[must_use]
    pub fn new(start: f64, target: f64, duration_ms: f64) -> Self {
        Self { start, distance: target - start, duration_ms }
    }

    /// Scroll offset after `elapsed_ms`; clamps to the target once done.
    #[must_use]
    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        let elapsed = elapsed_ms.clamp(0.0, self.duration_ms.max(0.0));
        ease_in_out_quad(elapsed, self.start, self.distance, self.duration_ms)
    }

    #[must_use]
    pub fn is_running(&self, elapsed_ms: f64) -> bool {
        elapsed_ms < self.duration_ms
    }
}

/// Animate the window scroll with [`ScrollTween`] on `requestAnimationFrame`.
#[cfg(feature = "hydrate")]
pub fn animate_window_scroll(target_top: f64, duration_ms: f64) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let Some(window) = web_sys::window() else {
        return;
    };
    let start = window.page_y_offset().unwrap_or(0.0);
    let tween = ScrollTween::new(start, target_top, duration_ms);
    let slot = Rc::new(RefCell::new(None));
    schedule_frame(slot, tween, None);
}

#[cfg(feature = "hydrate")]
fn schedule_frame(
    slot: std::rc::Rc<std::cell::RefCell<Option<gloo_render::AnimationFrame>>>,
    tween: ScrollTween,
    started_at: Option<f64>,
) {
    let next = std::rc::Rc::clone(&slot);
    let frame = gloo_render::request_animation_frame(move |timestamp| {
        next.borrow_mut().take();
        let started = started_at.unwrap_or(timestamp);
        let elapsed = timestamp - started;
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, tween.position_at(elapsed));
        }
        if tween.is_running(elapsed) {
            schedule_frame(next, tween, Some(started));
        }
    });
    *slot.borrow_mut() = Some(frame);
}

//! Debounce and throttle.
//!
//! The gates themselves are clock-driven state machines so they can be
//! exercised natively. The `hydrate` `debounce` wrapper drives a
//! [`Debouncer`] from `Date::now()` and a `gloo-timers` timeout; dropping a
//! pending `Timeout` cancels it, which is how a new call clears the previous
//! one.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

/// Trailing-edge debounce gate.
///
/// Each [`call`](Self::call) replaces the pending value and pushes the
/// deadline out to `now + wait`. [`poll`](Self::poll) yields the last value
/// once the deadline has passed.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait_ms: f64,
    deadline_ms: Option<f64>,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(wait_ms: f64) -> Self {
        Self { wait_ms, deadline_ms: None, pending: None }
    }

    pub fn call(&mut self, now_ms: f64, value: T) {
        self.deadline_ms = Some(now_ms + self.wait_ms);
        self.pending = Some(value);
    }

    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// Time left until the pending value is due, if one is pending.
    #[must_use]
    pub fn remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.pending.as_ref()?;
        self.deadline_ms.map(|deadline| (deadline - now_ms).max(0.0))
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Leading-edge throttle gate: the first call in a window passes, the rest
/// of that window is dropped.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    limit_ms: f64,
    window_start_ms: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(limit_ms: f64) -> Self {
        Self { limit_ms, window_start_ms: None }
    }

    /// Returns `true` when a call at `now_ms` should run.
    pub fn admit(&mut self, now_ms: f64) -> bool {
        match self.window_start_ms {
            Some(start) if now_ms - start < self.limit_ms => false,
            _ => {
                self.window_start_ms = Some(now_ms);
                true
            }
        }
    }
}

/// Wrap `f` so rapid calls collapse into one trailing call after `wait_ms`.
///
/// Each call records its value in a [`Debouncer`] and re-arms the timer. A
/// timer that fires before the deadline (clock granularity) re-arms for the
/// remainder instead of dropping the value.
#[cfg(feature = "hydrate")]
pub fn debounce<T: 'static>(wait_ms: u32, f: impl Fn(T) + 'static) -> impl Fn(T) {
    let state = std::rc::Rc::new(browser::Debounced {
        gate: std::cell::RefCell::new(Debouncer::new(f64::from(wait_ms))),
        timer: std::cell::RefCell::new(None),
        f: Box::new(f),
    });
    move |value: T| {
        state.gate.borrow_mut().call(js_sys::Date::now(), value);
        browser::arm(&state, wait_ms);
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;

    use super::Debouncer;

    pub(super) struct Debounced<T> {
        pub(super) gate: RefCell<Debouncer<T>>,
        pub(super) timer: RefCell<Option<Timeout>>,
        pub(super) f: Box<dyn Fn(T)>,
    }

    /// Replace the pending timeout; dropping the old one cancels it.
    pub(super) fn arm<T: 'static>(state: &Rc<Debounced<T>>, delay_ms: u32) {
        let next = Rc::clone(state);
        *state.timer.borrow_mut() = Some(Timeout::new(delay_ms, move || fire(&next)));
    }

    fn fire<T: 'static>(state: &Rc<Debounced<T>>) {
        let now = js_sys::Date::now();
        let due = state.gate.borrow_mut().poll(now);
        if let Some(value) = due {
            (state.f)(value);
            return;
        }
        let remaining = state.gate.borrow().remaining_ms(now);
        if let Some(remaining) = remaining {
            arm(state, whole_ms(remaining));
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn whole_ms(ms: f64) -> u32 {
        ms.ceil().max(1.0) as u32
    }
}

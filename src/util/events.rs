//! Typed handler registry for shared event sources.
//!
//! SYSTEM CONTEXT
//! ==============
//! Several managers react to the same window scroll. Rather than each one
//! attaching its own listener, `performance` owns a single throttled source
//! and fans samples out through a [`Subscribers`] list. Dispatch is
//! synchronous and preserves registration order.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

/// Ordered list of handlers for events of type `E`.
pub struct Subscribers<E> {
    handlers: Vec<Box<dyn Fn(&E)>>,
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self { handlers: Vec::new() }
    }
}

impl<E> Subscribers<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: impl Fn(&E) + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Deliver `event` to every handler in registration order.
    pub fn dispatch(&self, event: &E) {
        for handler in &self.handlers {
            handler(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

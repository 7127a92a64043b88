use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[test]
fn dispatch_preserves_registration_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut subs = Subscribers::<u32>::new();
    for tag in ["nav", "parallax", "dots"] {
        let seen = Rc::clone(&seen);
        subs.subscribe(move |value| seen.borrow_mut().push(format!("{tag}:{value}")));
    }

    subs.dispatch(&7);
    assert_eq!(*seen.borrow(), vec!["nav:7", "parallax:7", "dots:7"]);
}

#[test]
fn every_dispatch_reaches_every_handler() {
    let count = Rc::new(RefCell::new(0));
    let mut subs = Subscribers::<()>::new();
    let counter = Rc::clone(&count);
    subs.subscribe(move |()| *counter.borrow_mut() += 1);
    subs.dispatch(&());
    subs.dispatch(&());
    assert_eq!(*count.borrow(), 2);
    assert_eq!(subs.len(), 1);
}

#[test]
fn empty_registry_dispatch_is_noop() {
    let subs = Subscribers::<String>::default();
    assert!(subs.is_empty());
    subs.dispatch(&"ignored".to_owned());
}

use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn viewport(scroll_top: f64) -> Viewport {
    Viewport { scroll_top, width: 1280.0, height: 800.0 }
}

fn recording_source(limit_ms: f64) -> (ScrollSource, Rc<RefCell<Vec<f64>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut subscribers = Subscribers::new();
    let sink = Rc::clone(&seen);
    subscribers.subscribe(move |v: &Viewport| sink.borrow_mut().push(v.scroll_top));
    (ScrollSource::new(limit_ms, subscribers), seen)
}

#[test]
fn scroll_source_admits_one_sample_per_window() {
    let (source, seen) = recording_source(16.0);
    assert!(source.sample(0.0, &viewport(10.0)));
    assert!(!source.sample(8.0, &viewport(20.0)));
    assert!(source.sample(16.0, &viewport(30.0)));
    assert_eq!(*seen.borrow(), vec![10.0, 30.0]);
}

#[test]
fn flush_bypasses_the_throttle() {
    let (source, seen) = recording_source(16.0);
    source.sample(0.0, &viewport(10.0));
    source.flush(&viewport(42.0));
    assert_eq!(*seen.borrow(), vec![10.0, 42.0]);
}

#[test]
fn subscribers_may_read_the_source_while_it_dispatches() {
    let source = Rc::new(RefCell::new(None::<Rc<ScrollSource>>));
    let counts = Rc::new(RefCell::new(Vec::new()));
    let mut subscribers = Subscribers::new();
    {
        let source = Rc::clone(&source);
        let counts = Rc::clone(&counts);
        subscribers.subscribe(move |_: &Viewport| {
            if let Some(inner) = source.borrow().as_ref() {
                counts.borrow_mut().push(inner.subscriber_count());
            }
        });
    }
    let shared = Rc::new(ScrollSource::new(16.0, subscribers));
    *source.borrow_mut() = Some(Rc::clone(&shared));

    assert!(shared.sample(0.0, &viewport(5.0)));
    shared.flush(&viewport(6.0));
    assert_eq!(*counts.borrow(), vec![1, 1]);
    *source.borrow_mut() = None;
}

#[test]
fn every_subscriber_sees_each_sample() {
    let count = Rc::new(RefCell::new(0));
    let mut subscribers = Subscribers::new();
    for _ in 0..3 {
        let count = Rc::clone(&count);
        subscribers.subscribe(move |_: &Viewport| *count.borrow_mut() += 1);
    }
    let source = ScrollSource::new(16.0, subscribers);
    assert_eq!(source.subscriber_count(), 3);
    source.sample(0.0, &viewport(0.0));
    assert_eq!(*count.borrow(), 3);
}

/// Attribute-backed image, mirroring `<img data-src>`.
#[derive(Default)]
struct FakeImage {
    data_src: Option<String>,
    src: Option<String>,
    loads: usize,
}

impl DeferredImage for FakeImage {
    fn deferred_src(&self) -> Option<String> {
        self.data_src.clone()
    }

    fn load(&mut self, src: &str) {
        self.src = Some(src.to_string());
        self.data_src = None;
        self.loads += 1;
    }
}

#[test]
fn deferred_image_loads_once_across_repeated_reports() {
    let mut image = FakeImage { data_src: Some("images/hero.webp".to_string()), ..FakeImage::default() };
    assert!(reveal_image(&mut image));
    assert!(!reveal_image(&mut image));
    assert!(!reveal_image(&mut image));
    assert_eq!(image.src.as_deref(), Some("images/hero.webp"));
    assert_eq!(image.data_src, None);
    assert_eq!(image.loads, 1);
}

#[test]
fn image_without_deferred_source_is_left_alone() {
    let mut image = FakeImage { src: Some("already.png".to_string()), ..FakeImage::default() };
    assert!(!reveal_image(&mut image));
    assert_eq!(image.src.as_deref(), Some("already.png"));

    let mut blank = FakeImage { data_src: Some("  ".to_string()), ..FakeImage::default() };
    assert!(!reveal_image(&mut blank));
    assert_eq!(blank.loads, 0);
}

#[test]
fn animations_pause_while_hidden() {
    assert_eq!(animation_play_state(true), "paused");
    assert_eq!(animation_play_state(false), "running");
}

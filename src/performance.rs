//! Scroll sampling, lazy images, asset preloading, and background pausing.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`ScrollSource`] is the page's only window `scroll` listener. It admits at
//! most one sample per throttle window and fans it out to the subscribers
//! registered by `navigation` and `animation`. A trailing sample is scheduled
//! for dropped events so the final resting position is always dispatched.

#[cfg(test)]
#[path = "performance_test.rs"]
mod performance_test;

use std::cell::Cell;

use crate::sections::Viewport;
use crate::util::events::Subscribers;
use crate::util::timing::Throttle;

/// Throttled fan-out of scroll samples.
///
/// Sampling takes `&self`: no borrow is held while subscribers run.
pub struct ScrollSource {
    throttle: Cell<Throttle>,
    subscribers: Subscribers<Viewport>,
}

impl ScrollSource {
    #[must_use]
    pub fn new(limit_ms: f64, subscribers: Subscribers<Viewport>) -> Self {
        Self { throttle: Cell::new(Throttle::new(limit_ms)), subscribers }
    }

    /// Dispatch `viewport` if the throttle admits it. Returns whether it did.
    pub fn sample(&self, now_ms: f64, viewport: &Viewport) -> bool {
        let mut throttle = self.throttle.get();
        let admitted = throttle.admit(now_ms);
        self.throttle.set(throttle);
        if !admitted {
            return false;
        }
        self.subscribers.dispatch(viewport);
        true
    }

    /// Dispatch regardless of the throttle window.
    pub fn flush(&self, viewport: &Viewport) {
        self.subscribers.dispatch(viewport);
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// An image whose real source waits in `data-src`.
///
/// [`load`](Self::load) must consume the deferred source; that is what makes
/// [`reveal_image`] one-shot across repeated visibility reports.
pub trait DeferredImage {
    fn deferred_src(&self) -> Option<String>;

    /// Swap `src` in and drop the deferred source.
    fn load(&mut self, src: &str);
}

/// Load a deferred image the first time it is seen. Returns whether a swap
/// happened.
pub fn reveal_image(image: &mut impl DeferredImage) -> bool {
    let Some(src) = image.deferred_src().filter(|src| !src.trim().is_empty()) else {
        return false;
    };
    image.load(&src);
    true
}

/// `animation-play-state` for `<body>` given tab visibility.
#[must_use]
pub fn animation_play_state(hidden: bool) -> &'static str {
    if hidden { "paused" } else { "running" }
}

#[cfg(feature = "hydrate")]
pub use browser::PerformanceManager;

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use gloo_events::EventListener;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlImageElement};

    use super::{DeferredImage, ScrollSource, animation_play_state, reveal_image};
    use crate::config::{CriticalAsset, PortfolioConfig};
    use crate::error::PortfolioError;
    use crate::sections::Viewport;
    use crate::util::dom;
    use crate::util::events::Subscribers;
    use crate::util::timing::debounce;
    use crate::util::visibility::VisibilityObserver;

    pub struct PerformanceManager {
        _lazy_images: Option<VisibilityObserver>,
        _listeners: Vec<EventListener>,
    }

    impl PerformanceManager {
        pub fn mount(config: &PortfolioConfig, subscribers: Subscribers<Viewport>) -> Result<Self, PortfolioError> {
            let window = dom::window()?;
            let document = dom::document()?;

            let source = Rc::new(ScrollSource::new(config.performance.scroll_throttle_ms, subscribers));
            log::debug!("scroll source with {} subscribers", source.subscriber_count());

            let trailing = {
                let source = Rc::clone(&source);
                let window = window.clone();
                debounce(wasm_ms(config.performance.scroll_throttle_ms), move |()| {
                    source.flush(&dom::viewport(&window));
                })
            };
            let scroll = {
                let window = window.clone();
                EventListener::new(&window.clone(), "scroll", move |_| {
                    let viewport = dom::viewport(&window);
                    if !source.sample(js_sys::Date::now(), &viewport) {
                        trailing(());
                    }
                })
            };

            let visibility = {
                let body = dom::body()?;
                let doc = document.clone();
                EventListener::new(&document, "visibilitychange", move |_| {
                    dom::set_style(&body, "animation-play-state", animation_play_state(doc.hidden()));
                })
            };

            let lazy_images = lazy_load_images(&dom::query_all(&document, "img[data-src]")?)?;
            preload(&document, &config.performance.critical_assets)?;

            Ok(Self { _lazy_images: lazy_images, _listeners: vec![scroll, visibility] })
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn wasm_ms(ms: f64) -> u32 {
        ms.max(0.0).round() as u32
    }

    /// `<img data-src>`; the attribute itself is the pending state.
    struct LazyImg<'a>(&'a HtmlImageElement);

    impl DeferredImage for LazyImg<'_> {
        fn deferred_src(&self) -> Option<String> {
            self.0.get_attribute("data-src")
        }

        fn load(&mut self, src: &str) {
            self.0.set_src(src);
            let _ = self.0.remove_attribute("data-src");
        }
    }

    fn lazy_load_images(images: &[Element]) -> Result<Option<VisibilityObserver>, PortfolioError> {
        if images.is_empty() {
            return Ok(None);
        }
        let observer = VisibilityObserver::new(images, None, None, |el, observer| {
            if let Some(img) = el.dyn_ref::<HtmlImageElement>() {
                reveal_image(&mut LazyImg(img));
            }
            observer.unobserve(el);
        })?;
        Ok(Some(observer))
    }

    fn preload(document: &Document, assets: &[CriticalAsset]) -> Result<(), PortfolioError> {
        if assets.is_empty() {
            return Ok(());
        }
        let head = document.head().ok_or_else(|| PortfolioError::missing("head"))?;
        for asset in assets {
            let link = document.create_element("link")?;
            link.set_attribute("rel", "preload")?;
            link.set_attribute("href", &asset.url)?;
            link.set_attribute("as", &asset.kind)?;
            head.append_child(&link)?;
        }
        Ok(())
    }
}

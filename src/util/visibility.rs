//! `IntersectionObserver` wrapper shared by entrance reveals and lazy images.
//!
//! The callback closure lives as long as the [`VisibilityObserver`];
//! dropping the wrapper disconnects the observer first so the browser never
//! calls into a freed closure.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::PortfolioError;

pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    /// Observe `elements`, calling `on_visible` for each one that starts
    /// intersecting. The handler decides whether to unobserve.
    pub fn new(
        elements: &[Element],
        threshold: Option<f64>,
        root_margin: Option<&str>,
        mut on_visible: impl FnMut(&Element, &IntersectionObserver) + 'static,
    ) -> Result<Self, PortfolioError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        on_visible(&entry.target(), &observer);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        if let Some(threshold) = threshold {
            init.set_threshold(&JsValue::from_f64(threshold));
        }
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for el in elements {
            observer.observe(el);
        }
        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

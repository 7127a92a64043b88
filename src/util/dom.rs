//! Thin `web-sys` helpers shared by the browser bindings.
//!
//! Required lookups return [`PortfolioError::MissingElement`] so a manager
//! can bail out of its mount. Cosmetic writes drop their JS exceptions
//! here, in one place.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::error::PortfolioError;
use crate::sections::{SectionBounds, SectionLayout, Viewport};

pub fn window() -> Result<Window, PortfolioError> {
    web_sys::window().ok_or_else(|| PortfolioError::missing("window"))
}

pub fn document() -> Result<Document, PortfolioError> {
    window()?.document().ok_or_else(|| PortfolioError::missing("document"))
}

pub fn body() -> Result<HtmlElement, PortfolioError> {
    document()?.body().ok_or_else(|| PortfolioError::missing("body"))
}

/// `getElementById`, failing with the `#id` selector when absent.
pub fn require_id(document: &Document, id: &str) -> Result<Element, PortfolioError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PortfolioError::missing(format!("#{id}")))
}

/// `querySelector`, failing with the selector when absent.
pub fn require(document: &Document, selector: &str) -> Result<Element, PortfolioError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| PortfolioError::missing(selector))
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PortfolioError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn set_attribute(el: &Element, name: &str, value: &str) {
    let _ = el.set_attribute(name, value);
}

#[must_use]
pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Set an inline style property; empty `value` clears it.
pub fn set_style(el: &Element, property: &str, value: &str) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    if value.is_empty() {
        let _ = style.remove_property(property);
    } else {
        let _ = style.set_property(property, value);
    }
}

#[must_use]
pub fn viewport(window: &Window) -> Viewport {
    let number = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| v.ok().and_then(|v| v.as_f64());
    Viewport {
        scroll_top: window.page_y_offset().unwrap_or(0.0),
        width: number(window.inner_width()).unwrap_or(0.0),
        height: number(window.inner_height()).unwrap_or(0.0),
    }
}

/// Native smooth `window.scrollTo`.
pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// `offsetTop` / `offsetHeight` of one element.
#[must_use]
pub fn offset_box(el: &Element) -> Option<(f64, f64)> {
    let html = el.dyn_ref::<HtmlElement>()?;
    Some((f64::from(html.offset_top()), f64::from(html.offset_height())))
}

/// Snapshot every `section[id]` in document order.
pub fn sample_sections(document: &Document) -> Result<SectionLayout, PortfolioError> {
    let sections = query_all(document, "section[id]")?
        .iter()
        .filter_map(|el| {
            let (top, height) = offset_box(el)?;
            Some(SectionBounds::new(el.id(), top, height))
        })
        .collect();
    Ok(SectionLayout::new(sections))
}

/// Position of `el` among its parent's element children.
#[must_use]
pub fn sibling_index(el: &Element) -> usize {
    let mut index = 0;
    let mut cursor = el.previous_element_sibling();
    while let Some(prev) = cursor {
        index += 1;
        cursor = prev.previous_element_sibling();
    }
    index
}

/// Run `f` once the window `load` event has fired; immediately when the
/// document already finished loading before the module started.
pub fn on_load(f: impl FnOnce() + 'static) -> Result<Option<gloo_events::EventListener>, PortfolioError> {
    let window = window()?;
    let document = document()?;
    if document.ready_state() == "complete" {
        f();
        return Ok(None);
    }
    Ok(Some(gloo_events::EventListener::once(&window, "load", move |_| f())))
}

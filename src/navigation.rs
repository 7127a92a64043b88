//! Navbar behavior: scrolled state, active-section highlighting, the mobile
//! menu, click-to-scroll, and wheel/touch section snapping.
//!
//! SYSTEM CONTEXT
//! ==============
//! The scroll-driven parts subscribe to the shared scroll source owned by
//! `performance`; wheel and touch go straight to [`crate::snap`]. Section
//! geometry is re-sampled per event because lazy images and web fonts shift
//! `offsetTop` after load.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    #[must_use]
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Inline `overflow` for `<body>`: locked while the menu covers the page.
    #[must_use]
    pub fn body_overflow(self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }

    /// A click outside the navbar closes an open menu.
    #[must_use]
    pub fn closes_on_click(self, inside_navbar: bool) -> bool {
        self.open && !inside_navbar
    }

    /// Growing past the mobile breakpoint closes an open menu.
    #[must_use]
    pub fn closes_on_resize(self, viewport_width: f64, breakpoint: f64) -> bool {
        self.open && viewport_width > breakpoint
    }
}

/// Scroll offset for a nav-link jump: the section top minus the fixed navbar.
#[must_use]
pub fn link_scroll_target(section_top: f64, nav_offset: f64) -> f64 {
    section_top - nav_offset
}

/// Which of `candidates` should carry `active`, given the active section id.
///
/// `key` extracts the section id a marker points at; at most one marker is
/// marked even when several share an id.
#[must_use]
pub fn active_markers<T>(candidates: &[T], active_id: &str, key: impl Fn(&T) -> Option<String>) -> Vec<bool> {
    let mut claimed = false;
    candidates
        .iter()
        .map(|candidate| {
            let hit = !claimed && key(candidate).as_deref() == Some(active_id);
            claimed |= hit;
            hit
        })
        .collect()
}

#[cfg(feature = "hydrate")]
pub use browser::NavigationManager;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use gloo_events::{EventListener, EventListenerOptions};
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, Event, HtmlElement, Node, TouchEvent, WheelEvent, Window};

    use super::{MenuState, active_markers, link_scroll_target};
    use crate::config::PortfolioConfig;
    use crate::error::PortfolioError;
    use crate::sections::{Viewport, anchor_target, navbar_scrolled};
    use crate::snap::{Gesture, SnapPlanner};
    use crate::util::dom;
    use crate::util::easing::animate_window_scroll;
    use crate::util::events::Subscribers;
    use crate::util::timing::debounce;

    /// DOM handles the navigation listeners share.
    struct NavDom {
        window: Window,
        document: Document,
        body: HtmlElement,
        navbar: Element,
        nav_menu: Element,
        hamburger: Element,
        nav_links: Vec<Element>,
        scroll_dots: Vec<Element>,
    }

    impl NavDom {
        fn menu(&self) -> MenuState {
            MenuState { open: dom::has_class(&self.nav_menu, "active") }
        }

        fn set_menu(&self, menu: MenuState) {
            dom::set_class(&self.hamburger, "active", menu.open);
            dom::set_class(&self.nav_menu, "active", menu.open);
            dom::set_style(&self.body, "overflow", menu.body_overflow());
        }

        fn toggle_menu(&self) {
            self.set_menu(self.menu().toggled());
        }

        fn on_scroll(&self, viewport: &Viewport, config: &PortfolioConfig) {
            let nav = &config.navigation;
            dom::set_class(&self.navbar, "scrolled", navbar_scrolled(viewport.scroll_top, nav.scrolled_threshold_px));

            let Ok(layout) = dom::sample_sections(&self.document) else {
                return;
            };
            let Some(active) = layout.active_id(viewport.scroll_top, nav.look_ahead_px) else {
                return;
            };
            let links = active_markers(&self.nav_links, active, |link| {
                link.get_attribute("href")
                    .and_then(|href| anchor_target(&href).map(str::to_owned))
            });
            for (link, on) in self.nav_links.iter().zip(links) {
                dom::set_class(link, "active", on);
            }
            let dots = active_markers(&self.scroll_dots, active, |dot| dot.get_attribute("data-section"));
            for (dot, on) in self.scroll_dots.iter().zip(dots) {
                dom::set_class(dot, "active", on);
            }
        }

        fn section_top(&self, id: &str) -> Option<f64> {
            let el = self.document.get_element_by_id(id)?;
            dom::offset_box(&el).map(|(top, _)| top)
        }
    }

    pub struct NavigationManager {
        _listeners: Vec<EventListener>,
    }

    impl NavigationManager {
        pub fn mount(config: &Rc<PortfolioConfig>, scroll: &mut Subscribers<Viewport>) -> Result<Self, PortfolioError> {
            let window = dom::window()?;
            let document = dom::document()?;
            let nav = Rc::new(NavDom {
                body: dom::body()?,
                navbar: dom::require_id(&document, "navbar")?,
                nav_menu: dom::require_id(&document, "navMenu")?,
                hamburger: dom::require_id(&document, "hamburger")?,
                nav_links: dom::query_all(&document, ".nav-link")?,
                scroll_dots: dom::query_all(&document, ".scroll-dot")?,
                window,
                document,
            });

            {
                let nav = Rc::clone(&nav);
                let config = Rc::clone(config);
                scroll.subscribe(move |viewport| nav.on_scroll(viewport, &config));
            }
            nav.on_scroll(&dom::viewport(&nav.window), config);

            let mut listeners = Vec::new();
            listeners.push(hamburger_listener(&nav));
            listeners.extend(nav_link_listeners(&nav, config));
            listeners.extend(dot_listeners(&nav));
            listeners.push(outside_click_listener(&nav));
            listeners.push(resize_listener(&nav, config));
            listeners.extend(anchor_listeners(&nav, config)?);
            listeners.extend(snap_listeners(&nav, config));

            log::debug!(
                "navigation mounted: {} links, {} dots",
                nav.nav_links.len(),
                nav.scroll_dots.len()
            );
            Ok(Self { _listeners: listeners })
        }
    }

    fn hamburger_listener(nav: &Rc<NavDom>) -> EventListener {
        let handler = Rc::clone(nav);
        EventListener::new(&nav.hamburger, "click", move |_| handler.toggle_menu())
    }

    fn nav_link_listeners(nav: &Rc<NavDom>, config: &Rc<PortfolioConfig>) -> Vec<EventListener> {
        nav.nav_links
            .iter()
            .map(|link| {
                let nav = Rc::clone(nav);
                let config = Rc::clone(config);
                let target = link.clone();
                EventListener::new_with_options(link, "click", EventListenerOptions::enable_prevent_default(), move |event| {
                    event.prevent_default();
                    let Some(href) = target.get_attribute("href") else {
                        return;
                    };
                    let Some(top) = anchor_target(&href).and_then(|id| nav.section_top(id)) else {
                        return;
                    };
                    dom::smooth_scroll_to(&nav.window, link_scroll_target(top, config.navigation.scroll_offset_px));
                    if nav.menu().open {
                        nav.toggle_menu();
                    }
                })
            })
            .collect()
    }

    fn dot_listeners(nav: &Rc<NavDom>) -> Vec<EventListener> {
        nav.scroll_dots
            .iter()
            .map(|dot| {
                let nav = Rc::clone(nav);
                let target = dot.clone();
                EventListener::new(dot, "click", move |_| {
                    let Some(top) = target
                        .get_attribute("data-section")
                        .and_then(|id| nav.section_top(&id))
                    else {
                        return;
                    };
                    dom::smooth_scroll_to(&nav.window, top);
                })
            })
            .collect()
    }

    fn outside_click_listener(nav: &Rc<NavDom>) -> EventListener {
        let handler = Rc::clone(nav);
        EventListener::new(&nav.document, "click", move |event: &Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = handler.navbar.contains(target.as_ref());
            if handler.menu().closes_on_click(inside) {
                handler.toggle_menu();
            }
        })
    }

    fn resize_listener(nav: &Rc<NavDom>, config: &Rc<PortfolioConfig>) -> EventListener {
        let handler = Rc::clone(nav);
        let breakpoint = config.navigation.mobile_breakpoint_px;
        let on_resize = debounce(config.navigation.resize_debounce_ms, move |()| {
            let width = dom::viewport(&handler.window).width;
            if handler.menu().closes_on_resize(width, breakpoint) {
                handler.toggle_menu();
            }
        });
        EventListener::new(&nav.window, "resize", move |_| on_resize(()))
    }

    /// In-page anchors other than nav links get the eased scroll.
    fn anchor_listeners(nav: &Rc<NavDom>, config: &Rc<PortfolioConfig>) -> Result<Vec<EventListener>, PortfolioError> {
        let anchors = dom::query_all(&nav.document, r##"a[href^="#"]:not(.nav-link)"##)?;
        Ok(anchors
            .iter()
            .map(|anchor| {
                let nav = Rc::clone(nav);
                let config = Rc::clone(config);
                let target = anchor.clone();
                EventListener::new_with_options(anchor, "click", EventListenerOptions::enable_prevent_default(), move |event| {
                    event.prevent_default();
                    let Some(top) = target
                        .get_attribute("href")
                        .and_then(|href| anchor_target(&href).and_then(|id| nav.section_top(id)))
                    else {
                        return;
                    };
                    animate_window_scroll(
                        link_scroll_target(top, config.navigation.scroll_offset_px),
                        config.performance.smooth_scroll_ms,
                    );
                })
            })
            .collect())
    }

    fn snap_listeners(nav: &Rc<NavDom>, config: &Rc<PortfolioConfig>) -> Vec<EventListener> {
        let planner = Rc::new(RefCell::new(SnapPlanner::new(config.snap.clone())));
        let touch_start_y = Rc::new(Cell::new(0.0_f64));

        let wheel = {
            let handler = Rc::clone(nav);
            let planner = Rc::clone(&planner);
            EventListener::new_with_options(&nav.window, "wheel", EventListenerOptions::enable_prevent_default(), move |event| {
                let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                    return;
                };
                let gesture = Gesture::Wheel { delta_y: wheel.delta_y() };
                if let Some(top) = plan_snap(&handler, &planner, gesture) {
                    event.prevent_default();
                    dom::smooth_scroll_to(&handler.window, top);
                }
            })
        };

        let touch_start = {
            let start = Rc::clone(&touch_start_y);
            EventListener::new(&nav.window, "touchstart", move |event| {
                if let Some(y) = first_touch_y(event) {
                    start.set(y);
                }
            })
        };

        let touch_end = {
            let handler = Rc::clone(nav);
            EventListener::new(&nav.window, "touchend", move |event| {
                let Some(end_y) = first_touch_y(event) else {
                    return;
                };
                let gesture = Gesture::Swipe { start_y: touch_start_y.get(), end_y };
                if let Some(top) = plan_snap(&handler, &planner, gesture) {
                    dom::smooth_scroll_to(&handler.window, top);
                }
            })
        };

        vec![wheel, touch_start, touch_end]
    }

    fn plan_snap(nav: &NavDom, planner: &RefCell<SnapPlanner>, gesture: Gesture) -> Option<f64> {
        let layout = dom::sample_sections(&nav.document).ok()?;
        let viewport = dom::viewport(&nav.window);
        planner
            .borrow_mut()
            .plan(&layout, &viewport, gesture, js_sys::Date::now())
            .map(|target| target.scroll_top)
    }

    fn first_touch_y(event: &Event) -> Option<f64> {
        let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
        Some(f64::from(touch.screen_y()))
    }
}

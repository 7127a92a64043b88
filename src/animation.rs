//! Entrance reveals, load-time hero animation, scroll parallax, and pointer
//! hover effects.
//!
//! ARCHITECTURE
//! ============
//! The CSS owns the actual transitions; this module only flips classes and
//! writes inline transforms. Reveal decisions and transform strings are pure
//! functions so they can be checked without a browser.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use crate::config::AnimationConfig;
use crate::consts::GRID_CARD_CLASSES;

/// What to do with an element the reveal observer reports as visible.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    /// Inline `transition-delay` for grid cards.
    pub transition_delay: Option<String>,
}

/// Whether an element's `class` attribute marks it as a grid card.
#[must_use]
pub fn is_grid_card(class_name: &str) -> bool {
    class_name
        .split_whitespace()
        .any(|class| GRID_CARD_CLASSES.contains(&class))
}

/// Transition delay for the `index`-th child of a grid.
#[must_use]
pub fn stagger_delay(index: usize, step_s: f64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let delay = index as f64 * step_s;
    format!("{delay:.2}s")
}

/// Reveal an element with the given classes at `sibling_index`.
#[must_use]
pub fn plan_reveal(class_name: &str, sibling_index: usize, config: &AnimationConfig) -> Reveal {
    let transition_delay =
        is_grid_card(class_name).then(|| stagger_delay(sibling_index, config.stagger_step_s));
    Reveal { transition_delay }
}

/// Transform for the `index`-th decorative `.shape` at `scroll_top`.
#[must_use]
pub fn parallax_transform(scroll_top: f64, index: usize, config: &AnimationConfig) -> String {
    let rate = scroll_top * config.parallax_rate;
    #[allow(clippy::cast_precision_loss)]
    let speed = (index + 1) as f64 * config.parallax_speed_step;
    let rotation = scroll_top * config.parallax_rotation_per_px;
    format!("translateY({}px) rotate({}deg)", rate * speed, rotation)
}

/// 3D tilt for a card of `width`×`height` with the pointer at (`x`, `y`)
/// relative to its top-left corner.
#[must_use]
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64, divisor: f64) -> String {
    let rotate_x = (y - height / 2.0) / divisor;
    let rotate_y = (width / 2.0 - x) / divisor;
    format!("perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) translateZ(10px)")
}

#[cfg(feature = "hydrate")]
pub use browser::AnimationManager;

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;
    use std::time::Duration;

    use gloo_events::EventListener;
    use gloo_timers::future::sleep;
    use wasm_bindgen::JsCast;
    use web_sys::{Element, MouseEvent};

    use super::{parallax_transform, plan_reveal, tilt_transform};
    use crate::config::PortfolioConfig;
    use crate::consts::{
        BUTTON_HOVER_TRANSFORM, LOAD_ANIMATION_SELECTOR, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD,
        TILT_SELECTOR,
    };
    use crate::error::PortfolioError;
    use crate::sections::Viewport;
    use crate::util::dom;
    use crate::util::events::Subscribers;
    use crate::util::visibility::VisibilityObserver;

    pub struct AnimationManager {
        _reveal: VisibilityObserver,
        _listeners: Vec<EventListener>,
    }

    impl AnimationManager {
        pub fn mount(config: &Rc<PortfolioConfig>, scroll: &mut Subscribers<Viewport>) -> Result<Self, PortfolioError> {
            let document = dom::document()?;

            let reveal = reveal_observer(&dom::query_all(&document, REVEAL_SELECTOR)?, config)?;

            let mut listeners = Vec::new();
            listeners.extend(load_animation(&dom::query_all(&document, LOAD_ANIMATION_SELECTOR)?, config)?);

            let shapes = dom::query_all(&document, ".shape")?;
            if !shapes.is_empty() {
                let config = Rc::clone(config);
                scroll.subscribe(move |viewport| {
                    for (index, shape) in shapes.iter().enumerate() {
                        dom::set_style(shape, "transform", &parallax_transform(viewport.scroll_top, index, &config.animation));
                    }
                });
            }

            for button in dom::query_all(&document, ".btn")? {
                listeners.push(EventListener::new(&button, "mouseenter", {
                    let button = button.clone();
                    move |_| dom::set_style(&button, "transform", BUTTON_HOVER_TRANSFORM)
                }));
                listeners.push(reset_transform_on_leave(&button));
            }

            for card in dom::query_all(&document, TILT_SELECTOR)? {
                let divisor = config.animation.tilt_divisor;
                listeners.push(EventListener::new(&card, "mousemove", {
                    let card = card.clone();
                    move |event| {
                        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        let rect = card.get_bounding_client_rect();
                        let x = f64::from(mouse.client_x()) - rect.left();
                        let y = f64::from(mouse.client_y()) - rect.top();
                        dom::set_style(&card, "transform", &tilt_transform(x, y, rect.width(), rect.height(), divisor));
                    }
                }));
                listeners.push(reset_transform_on_leave(&card));
            }

            Ok(Self { _reveal: reveal, _listeners: listeners })
        }
    }

    /// One-shot entrance: `loading` now, `loaded` on first visibility.
    fn reveal_observer(elements: &[Element], config: &Rc<PortfolioConfig>) -> Result<VisibilityObserver, PortfolioError> {
        for el in elements {
            dom::add_class(el, "loading");
        }
        let config = Rc::clone(config);
        VisibilityObserver::new(elements, Some(REVEAL_THRESHOLD), Some(REVEAL_ROOT_MARGIN), move |el, observer| {
            let reveal = plan_reveal(&el.class_name(), dom::sibling_index(el), &config.animation);
            dom::add_class(el, "loaded");
            if let Some(delay) = reveal.transition_delay {
                dom::set_style(el, "transition-delay", &delay);
            }
            observer.unobserve(el);
        })
    }

    /// Hero elements animate in shortly after the page finishes loading.
    fn load_animation(elements: &[Element], config: &Rc<PortfolioConfig>) -> Result<Option<EventListener>, PortfolioError> {
        for el in elements {
            dom::add_class(el, "loading");
        }
        let elements = elements.to_vec();
        let delay = Duration::from_millis(u64::from(config.animation.load_delay_ms));
        dom::on_load(move || {
            wasm_bindgen_futures::spawn_local(async move {
                sleep(delay).await;
                for el in &elements {
                    dom::add_class(el, "loaded");
                }
            });
        })
    }

    fn reset_transform_on_leave(el: &Element) -> EventListener {
        let target = el.clone();
        EventListener::new(el, "mouseleave", move |_| dom::set_style(&target, "transform", ""))
    }
}

//! Page boot: logging, configuration, and manager composition.
//!
//! DECISION FLOW
//! =============
//! 1. Route `log` and panics to the browser console.
//! 2. Read `#portfolio-config`, falling back to defaults.
//! 3. Mount each manager. Scroll consumers subscribe before the
//!    performance manager takes ownership of the subscriber list.
//! 4. Park the result in a thread-local so listeners live as long as the page.
//!
//! A manager that fails to mount is logged and skipped; the others still run.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::ErrorEvent;

use crate::animation::AnimationManager;
use crate::config::PortfolioConfig;
use crate::contact::ContactTracker;
use crate::easter_eggs::EasterEggs;
use crate::error::PortfolioError;
use crate::navigation::NavigationManager;
use crate::performance::PerformanceManager;
use crate::sections::Viewport;
use crate::theme::ThemeManager;
use crate::util::dom;
use crate::util::events::Subscribers;

thread_local! {
    static PORTFOLIO: RefCell<Option<Portfolio>> = const { RefCell::new(None) };
}

/// Everything the page keeps alive.
pub struct Portfolio {
    _theme: Option<ThemeManager>,
    _navigation: Option<NavigationManager>,
    _animation: Option<AnimationManager>,
    _performance: Option<PerformanceManager>,
    _contact: Option<ContactTracker>,
    _easter_eggs: Option<EasterEggs>,
    _lifecycle: Vec<EventListener>,
}

pub fn boot() {
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = Rc::new(PortfolioConfig::from_document());
    let mut scroll = Subscribers::<Viewport>::new();

    let theme = mounted("theme", ThemeManager::mount());
    let navigation = mounted("navigation", NavigationManager::mount(&config, &mut scroll));
    let animation = mounted("animation", AnimationManager::mount(&config, &mut scroll));
    let performance = mounted("performance", PerformanceManager::mount(&config, scroll));
    let contact = mounted("contact", ContactTracker::mount());
    let easter_eggs = mounted("easter eggs", EasterEggs::mount(&config));
    let lifecycle = mounted("lifecycle", lifecycle()).unwrap_or_default();

    PORTFOLIO.with(|slot| {
        *slot.borrow_mut() = Some(Portfolio {
            _theme: theme,
            _navigation: navigation,
            _animation: animation,
            _performance: performance,
            _contact: contact,
            _easter_eggs: easter_eggs,
            _lifecycle: lifecycle,
        });
    });
    log::info!("portfolio loaded");
}

fn mounted<T>(name: &str, result: Result<T, PortfolioError>) -> Option<T> {
    match result {
        Ok(manager) => Some(manager),
        Err(err) => {
            log::warn!("{name} disabled: {err}");
            None
        }
    }
}

/// Uncaught error logging and the `body.loaded` marker.
fn lifecycle() -> Result<Vec<EventListener>, PortfolioError> {
    let window = dom::window()?;
    let body = dom::body()?;

    let mut listeners = vec![EventListener::new(&window, "error", |event| {
        let message = event.dyn_ref::<ErrorEvent>().map(ErrorEvent::message).unwrap_or_default();
        log::error!("uncaught error: {message}");
    })];
    listeners.extend(dom::on_load(move || dom::add_class(&body, "loaded"))?);
    Ok(listeners)
}

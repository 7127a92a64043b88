//! Konami code, logo click counter, and the console greeting.
//!
//! Both trackers are plain state machines fed by the browser bindings; the
//! effects they trigger are temporary style injections removed after a
//! configured duration.

#[cfg(test)]
#[path = "easter_eggs_test.rs"]
mod easter_eggs_test;

/// `KeyboardEvent.key` values for ↑ ↑ ↓ ↓ ← → ← → B A.
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

pub const RAINBOW_KEYFRAMES: &str =
    "@keyframes rainbow { 0% { filter: hue-rotate(0deg); } 100% { filter: hue-rotate(360deg); } }";

pub const FADE_IN_OUT_KEYFRAMES: &str = "@keyframes fadeInOut { \
     0%, 100% { opacity: 0; transform: translate(-50%, -50%) scale(0.8); } \
     20%, 80% { opacity: 1; transform: translate(-50%, -50%) scale(1); } }";

pub const LOGO_MESSAGE: &str = "You really like clicking that logo!";

pub const DEVELOPER_GREETING: &str = "Hey there, fellow developer! Thanks for checking out the console. \
     This portfolio's interactivity is Rust compiled to WebAssembly.";

/// Progress through [`KONAMI_SEQUENCE`].
#[derive(Debug, Clone, Default)]
pub struct KonamiTracker {
    progress: usize,
}

impl KonamiTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key. Returns `true` when it completes the sequence.
    ///
    /// A wrong key keeps the longest tail of the input so far that is still
    /// a prefix of the code, so `↑ ↑ ↑ ↓ ↓ …` completes.
    pub fn push(&mut self, key: &str) -> bool {
        self.progress = (1..=self.progress + 1)
            .rev()
            .find(|&len| {
                let matched = &KONAMI_SEQUENCE[self.progress + 1 - len..self.progress];
                key.eq_ignore_ascii_case(KONAMI_SEQUENCE[len - 1]) && *matched == KONAMI_SEQUENCE[..len - 1]
            })
            .unwrap_or(0);

        if self.progress == KONAMI_SEQUENCE.len() {
            self.progress = 0;
            return true;
        }
        false
    }

    #[must_use]
    pub fn progress(&self) -> usize {
        self.progress
    }
}

/// Counts clicks and fires every `target`-th one.
#[derive(Debug, Clone)]
pub struct ClickCounter {
    target: u32,
    clicks: u32,
}

impl ClickCounter {
    #[must_use]
    pub fn new(target: u32) -> Self {
        Self { target: target.max(1), clicks: 0 }
    }

    pub fn click(&mut self) -> bool {
        self.clicks += 1;
        if self.clicks >= self.target {
            self.clicks = 0;
            return true;
        }
        false
    }

    #[must_use]
    pub fn clicks(&self) -> u32 {
        self.clicks
    }
}

/// Inline style for the centered logo notification.
#[must_use]
pub fn notification_style(duration_ms: u32) -> String {
    format!(
        "position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%); \
         background: var(--primary-color); color: white; padding: 1rem 2rem; \
         border-radius: 0.5rem; z-index: 9999; font-weight: 600; box-shadow: var(--shadow-xl); \
         animation: fadeInOut {}s ease-in-out;",
        f64::from(duration_ms) / 1000.0
    )
}

#[cfg(feature = "hydrate")]
pub use browser::EasterEggs;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use gloo_events::{EventListener, EventListenerOptions};
    use gloo_timers::future::sleep;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, KeyboardEvent};

    use super::{
        ClickCounter, DEVELOPER_GREETING, FADE_IN_OUT_KEYFRAMES, KonamiTracker, LOGO_MESSAGE, RAINBOW_KEYFRAMES,
        notification_style,
    };
    use crate::config::{EasterEggConfig, PortfolioConfig};
    use crate::error::PortfolioError;
    use crate::util::dom;

    pub struct EasterEggs {
        _listeners: Vec<EventListener>,
    }

    impl EasterEggs {
        pub fn mount(config: &PortfolioConfig) -> Result<Self, PortfolioError> {
            let document = dom::document()?;
            let eggs = config.easter_eggs.clone();
            let logo = dom::require(&document, ".nav-logo")?;

            let konami = {
                let tracker = RefCell::new(KonamiTracker::new());
                let document = document.clone();
                let eggs = eggs.clone();
                EventListener::new(&document.clone(), "keydown", move |event| {
                    let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                        return;
                    };
                    if tracker.borrow_mut().push(&key) {
                        rainbow(&document, &eggs);
                    }
                })
            };

            let logo_clicks = {
                let counter = Rc::new(RefCell::new(ClickCounter::new(eggs.logo_click_target)));
                EventListener::new_with_options(&logo, "click", EventListenerOptions::enable_prevent_default(), move |event| {
                    event.prevent_default();
                    if counter.borrow_mut().click() {
                        notify(&document, LOGO_MESSAGE, &eggs);
                    }
                })
            };

            log::info!("{DEVELOPER_GREETING}");
            Ok(Self { _listeners: vec![konami, logo_clicks] })
        }
    }

    fn inject_style(document: &Document, css: &str) -> Result<Element, PortfolioError> {
        let head = document.head().ok_or_else(|| PortfolioError::missing("head"))?;
        let style = document.create_element("style")?;
        style.set_text_content(Some(css));
        head.append_child(&style)?;
        Ok(style)
    }

    fn rainbow(document: &Document, eggs: &EasterEggConfig) {
        let Ok(body) = dom::body() else {
            return;
        };
        let Ok(style) = inject_style(document, RAINBOW_KEYFRAMES) else {
            return;
        };
        dom::set_style(&body, "animation", "rainbow 2s infinite");
        log::info!("Konami code activated! You found the easter egg!");

        let duration = Duration::from_millis(u64::from(eggs.rainbow_ms));
        wasm_bindgen_futures::spawn_local(async move {
            sleep(duration).await;
            dom::set_style(&body, "animation", "");
            style.remove();
        });
    }

    fn notify(document: &Document, message: &str, eggs: &EasterEggConfig) {
        let Ok(body) = dom::body() else {
            return;
        };
        let Ok(style) = inject_style(document, FADE_IN_OUT_KEYFRAMES) else {
            return;
        };
        let Ok(notification) = document.create_element("div") else {
            style.remove();
            return;
        };
        notification.set_text_content(Some(message));
        dom::set_attribute(&notification, "style", &notification_style(eggs.notification_ms));
        if body.append_child(&notification).is_err() {
            style.remove();
            return;
        }

        let duration = Duration::from_millis(u64::from(eggs.notification_ms));
        wasm_bindgen_futures::spawn_local(async move {
            sleep(duration).await;
            notification.remove();
            style.remove();
        });
    }
}

//! Light/dark theme preference.
//!
//! Reads the stored preference once at startup, applies it as a
//! `data-theme` attribute on `<html>`, and writes it back on every change.
//! The toggle button's icon follows the theme (`fa-sun` while dark,
//! `fa-moon` while light).
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A failed write is logged and the in-memory
//! theme still changes, so the page stays consistent for the session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::consts::THEME_STORAGE_KEY;
use crate::util::storage::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Font Awesome classes for the toggle icon: the icon shows the theme
    /// a click switches to.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the active theme becomes visible.
pub trait ThemeSurface {
    fn apply(&mut self, theme: Theme);
}

/// Theme state bound to a store and a surface.
pub struct ThemeController<S, V> {
    theme: Theme,
    store: S,
    surface: V,
}

impl<S: PreferenceStore, V: ThemeSurface> ThemeController<S, V> {
    /// Load the stored preference (light when unset or unreadable) and apply it.
    pub fn load(store: S, surface: V) -> Self {
        let theme = store
            .load(THEME_STORAGE_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default();
        let mut controller = Self { theme, store, surface };
        controller.set_theme(theme);
        controller
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Apply and persist `theme`.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.surface.apply(theme);
        if let Err(err) = self.store.save(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("theme not persisted: {err}");
        }
    }

    /// Flip between light and dark, returning the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn surface(&self) -> &V {
        &self.surface
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{DocumentSurface, ThemeManager};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;

    use gloo_events::EventListener;
    use gloo_timers::future::sleep;
    use std::time::Duration;
    use web_sys::Element;

    use super::{Theme, ThemeController, ThemeSurface};
    use crate::consts::THEME_SPIN_MS;
    use crate::error::PortfolioError;
    use crate::util::dom;
    use crate::util::storage::{PreferenceStore, open_preference_store};

    /// `<html data-theme>` plus the toggle icon.
    pub struct DocumentSurface {
        root: Element,
        icon: Option<Element>,
    }

    impl ThemeSurface for DocumentSurface {
        fn apply(&mut self, theme: Theme) {
            dom::set_attribute(&self.root, "data-theme", theme.as_str());
            if let Some(icon) = &self.icon {
                icon.set_class_name(theme.icon_class());
            }
        }
    }

    type Controller = ThemeController<Box<dyn PreferenceStore>, DocumentSurface>;

    pub struct ThemeManager {
        _click: EventListener,
    }

    impl ThemeManager {
        pub fn mount() -> Result<Self, PortfolioError> {
            let document = dom::document()?;
            let root = document
                .document_element()
                .ok_or_else(|| PortfolioError::missing("html"))?;
            let toggle = dom::require_id(&document, "themeToggle")?;
            let icon = toggle.query_selector("i")?;

            let surface = DocumentSurface { root, icon };
            let controller: RefCell<Controller> = RefCell::new(ThemeController::load(open_preference_store(), surface));

            let click = {
                let button = toggle.clone();
                EventListener::new(&toggle, "click", move |_| {
                    let theme = controller.borrow_mut().toggle();
                    log::debug!("theme switched to {theme}");
                    spin(&button);
                })
            };

            Ok(Self { _click: click })
        }
    }

    fn spin(button: &Element) {
        dom::set_style(button, "transform", "rotate(360deg)");
        let button = button.clone();
        wasm_bindgen_futures::spawn_local(async move {
            sleep(Duration::from_millis(u64::from(THEME_SPIN_MS))).await;
            dom::set_style(&button, "transform", "");
        });
    }
}

//! Interactivity layer for a single-page developer portfolio.
//!
//! The crate compiles to WebAssembly and attaches behaviour to server-rendered
//! markup: theme persistence, navigation highlighting, section snapping,
//! entrance animations, lazy images, and a few easter eggs. Everything that
//! decides something is plain Rust and tested natively; the `hydrate` feature
//! adds the `web-sys` bindings that read the DOM and apply those decisions.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark preference, persisted and applied to `<html>` |
//! | [`sections`] | Section geometry and active-section lookup |
//! | [`navigation`] | Menu state, active link and dot markers, anchor scrolling |
//! | [`snap`] | Wheel/swipe section snapping planner |
//! | [`animation`] | Entrance reveals, parallax, hover transforms |
//! | [`performance`] | Shared throttled scroll source, lazy images, preloads |
//! | [`contact`] | Contact link click logging |
//! | [`easter_eggs`] | Konami code and logo click counter |
//! | [`config`] | Tunables read from `#portfolio-config` |
//! | [`error`] | [`error::PortfolioError`] |
//! | [`consts`] | Default tunables and selectors |
//! | [`util`] | Timing gates, easing, storage, event fan-out, DOM helpers |

pub mod animation;
pub mod config;
pub mod consts;
pub mod contact;
pub mod easter_eggs;
pub mod error;
pub mod navigation;
pub mod performance;
pub mod sections;
pub mod snap;
pub mod theme;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod app;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    app::boot();
}

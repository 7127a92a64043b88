//! Page-level tunables parsed from an optional JSON block.
//!
//! SYSTEM CONTEXT
//! ==============
//! The static page may embed `<script type="application/json"
//! id="portfolio-config">` to override any threshold. Every field has a
//! default from [`crate::consts`], so an absent block, an empty object, or a
//! partial object all yield a complete config.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::*;
use crate::error::PortfolioError;

/// Id of the script element carrying JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub navigation: NavigationConfig,
    pub snap: SnapConfig,
    pub animation: AnimationConfig,
    pub performance: PerformanceConfig,
    pub easter_eggs: EasterEggConfig,
}

impl PortfolioConfig {
    /// Parse overrides from a JSON document.
    pub fn from_json(raw: &str) -> Result<Self, PortfolioError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the config block from the current document, falling back to
    /// defaults when it is absent or malformed.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let Some(raw) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub look_ahead_px: f64,
    pub scrolled_threshold_px: f64,
    pub scroll_offset_px: f64,
    pub mobile_breakpoint_px: f64,
    /// Quiet period before a resize closes the mobile menu.
    pub resize_debounce_ms: u32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            look_ahead_px: SECTION_LOOK_AHEAD_PX,
            scrolled_threshold_px: NAVBAR_SCROLLED_PX,
            scroll_offset_px: NAV_SCROLL_OFFSET_PX,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }
}

/// Edge tolerances for one input kind.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SnapTolerance {
    /// Slack around a short section's top and bottom edges.
    pub short_edge_px: f64,
    /// Slack on scroll progress inside a tall section.
    pub tall_edge_px: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    pub wheel: SnapTolerance,
    pub touch: SnapTolerance,
    pub swipe_threshold_px: f64,
    pub locate_offset_px: f64,
    pub cooldown_ms: f64,
    pub mobile_breakpoint_px: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            wheel: SnapTolerance { short_edge_px: WHEEL_SHORT_EDGE_PX, tall_edge_px: WHEEL_TALL_EDGE_PX },
            touch: SnapTolerance { short_edge_px: TOUCH_SHORT_EDGE_PX, tall_edge_px: TOUCH_TALL_EDGE_PX },
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            locate_offset_px: SNAP_LOCATE_OFFSET_PX,
            cooldown_ms: SNAP_COOLDOWN_MS,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub stagger_step_s: f64,
    pub load_delay_ms: u32,
    pub parallax_rate: f64,
    pub parallax_speed_step: f64,
    pub parallax_rotation_per_px: f64,
    pub tilt_divisor: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            stagger_step_s: STAGGER_STEP_S,
            load_delay_ms: LOAD_ANIMATION_DELAY_MS,
            parallax_rate: PARALLAX_RATE,
            parallax_speed_step: PARALLAX_SPEED_STEP,
            parallax_rotation_per_px: PARALLAX_ROTATION_PER_PX,
            tilt_divisor: TILT_DIVISOR,
        }
    }
}

/// An asset to warm with `<link rel="preload">`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CriticalAsset {
    pub url: String,
    /// Value for the link's `as` attribute (`image`, `font`, `style`, ...).
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    pub scroll_throttle_ms: f64,
    pub smooth_scroll_ms: f64,
    pub critical_assets: Vec<CriticalAsset>,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            scroll_throttle_ms: SCROLL_THROTTLE_MS,
            smooth_scroll_ms: SMOOTH_SCROLL_MS,
            critical_assets: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EasterEggConfig {
    pub logo_click_target: u32,
    pub notification_ms: u32,
    pub rainbow_ms: u32,
}

impl Default for EasterEggConfig {
    fn default() -> Self {
        Self { logo_click_target: LOGO_CLICK_TARGET, notification_ms: NOTIFICATION_MS, rainbow_ms: RAINBOW_MS }
    }
}

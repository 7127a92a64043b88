//! Shared numeric constants and selectors for the portfolio layer.
//!
//! Every tunable here is only a default; `config::PortfolioConfig` can
//! override it from the page.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// How long the toggle button keeps its spin transform, in milliseconds.
pub const THEME_SPIN_MS: u32 = 300;

// ── Navigation ──────────────────────────────────────────────────

/// Look-ahead applied to section tops when picking the active section.
pub const SECTION_LOOK_AHEAD_PX: f64 = 100.0;

/// Scroll offset past which the navbar gets the `scrolled` class.
pub const NAVBAR_SCROLLED_PX: f64 = 100.0;

/// Height reserved for the fixed navbar when scrolling to a section.
pub const NAV_SCROLL_OFFSET_PX: f64 = 80.0;

/// Viewport widths at or below this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Quiet period before a resize closes the mobile menu.
pub const RESIZE_DEBOUNCE_MS: u32 = 100;

// ── Scroll snapping ─────────────────────────────────────────────

/// Distance from a short section's edge that still counts as "at the edge" (wheel).
pub const WHEEL_SHORT_EDGE_PX: f64 = 100.0;

/// Scroll progress slack at a tall section's edges (wheel).
pub const WHEEL_TALL_EDGE_PX: f64 = 50.0;

/// Distance from a short section's edge that still counts as "at the edge" (touch).
pub const TOUCH_SHORT_EDGE_PX: f64 = 150.0;

/// Scroll progress slack at a tall section's edges (touch).
pub const TOUCH_TALL_EDGE_PX: f64 = 100.0;

/// Minimum vertical swipe distance before a touch gesture is considered.
pub const SWIPE_THRESHOLD_PX: f64 = 100.0;

/// Offset used when locating the section that holds the viewport.
pub const SNAP_LOCATE_OFFSET_PX: f64 = 100.0;

/// Guard window after a programmatic snap, in milliseconds.
pub const SNAP_COOLDOWN_MS: f64 = 1000.0;

// ── Animation ───────────────────────────────────────────────────

/// Visible fraction that triggers an entrance reveal.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin for the reveal observer (negative bottom bias).
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Per-sibling transition delay for grid cards, in seconds.
pub const STAGGER_STEP_S: f64 = 0.1;

/// Delay after window `load` before hero elements animate in.
pub const LOAD_ANIMATION_DELAY_MS: u32 = 300;

/// Vertical parallax rate applied to the scroll offset.
pub const PARALLAX_RATE: f64 = -0.5;

/// Extra speed per shape index.
pub const PARALLAX_SPEED_STEP: f64 = 0.2;

/// Degrees of shape rotation per scrolled pixel.
pub const PARALLAX_ROTATION_PER_PX: f64 = 0.1;

/// Pointer offset divisor for the card tilt effect.
pub const TILT_DIVISOR: f64 = 20.0;

/// Transform applied to `.btn` while hovered.
pub const BUTTON_HOVER_TRANSFORM: &str = "translateY(-2px) scale(1.05)";

// ── Performance ─────────────────────────────────────────────────

/// Scroll sampling window, roughly one frame at 60 fps.
pub const SCROLL_THROTTLE_MS: f64 = 16.0;

/// Duration of the eased anchor scroll.
pub const SMOOTH_SCROLL_MS: f64 = 1000.0;

// ── Easter eggs ─────────────────────────────────────────────────

/// Logo clicks needed to show the secret notification.
pub const LOGO_CLICK_TARGET: u32 = 10;

/// How long the secret notification stays on screen.
pub const NOTIFICATION_MS: u32 = 3000;

/// How long the Konami rainbow animation runs.
pub const RAINBOW_MS: u32 = 5000;

// ── Selectors ───────────────────────────────────────────────────

/// Elements revealed by the entrance observer.
pub const REVEAL_SELECTOR: &str = ".skill-card, .project-card, .stat-card, .contact-card, .webinar-card, \
                                   .timeline-item, .section-header, .about-text";

/// Grid cards that get a staggered transition delay.
pub const GRID_CARD_CLASSES: [&str; 3] = ["skill-card", "project-card", "stat-card"];

/// Elements animated in shortly after page load.
pub const LOAD_ANIMATION_SELECTOR: &str = ".hero-content, .profile-card";

/// Cards that tilt under the pointer.
pub const TILT_SELECTOR: &str = ".skill-card, .project-card, .contact-card";

/// Links whose clicks are logged.
pub const CONTACT_LINK_SELECTOR: &str =
    r#"a[href^="mailto:"], a[href^="https://github.com"], a[href^="https://linkedin.com"]"#;

//! Section-to-section scroll snapping for wheel and touch gestures.
//!
//! This is UI tuning rather than an algorithm: every threshold lives in
//! [`SnapConfig`] and the defaults were picked by feel.
//!
//! DECISION FLOW
//! =============
//! 1. Gate the gesture: wheel only on desktop widths, swipes only past the
//!    swipe threshold.
//! 2. Find the section holding the viewport (shifted by `locate_offset_px`).
//! 3. Decide whether the viewport sits at that section's top or bottom edge.
//!    Short sections compare edge distances; tall sections compare scroll
//!    progress through their scrollable range.
//! 4. Moving down from the bottom edge targets the next section's top.
//!    Moving up from the top edge targets the previous section's top, or its
//!    bottom edge when that section is taller than the viewport.
//! 5. [`SnapPlanner`] refuses new snaps until the cooldown after the last
//!    one has elapsed.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use crate::config::{SnapConfig, SnapTolerance};
use crate::sections::{SectionBounds, SectionLayout, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A user scroll gesture that may trigger a snap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Mouse wheel / trackpad; positive `delta_y` scrolls down.
    Wheel { delta_y: f64 },
    /// Completed touch swipe, in screen coordinates.
    Swipe { start_y: f64, end_y: f64 },
}

impl Gesture {
    /// Scroll direction implied by the gesture. A finger moving up the screen
    /// scrolls the page down.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        let delta = match self {
            Self::Wheel { delta_y } => delta_y,
            Self::Swipe { start_y, end_y } => start_y - end_y,
        };
        if delta > 0.0 {
            Some(Direction::Down)
        } else if delta < 0.0 {
            Some(Direction::Up)
        } else {
            None
        }
    }

    fn tolerance(self, config: &SnapConfig) -> SnapTolerance {
        match self {
            Self::Wheel { .. } => config.wheel,
            Self::Swipe { .. } => config.touch,
        }
    }

    fn passes_gate(self, config: &SnapConfig, viewport: &Viewport) -> bool {
        match self {
            Self::Wheel { .. } => viewport.width > config.mobile_breakpoint_px,
            Self::Swipe { start_y, end_y } => (start_y - end_y).abs() > config.swipe_threshold_px,
        }
    }
}

/// Where the viewport sits relative to the section it is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeState {
    pub at_top: bool,
    pub at_bottom: bool,
}

/// Classify the viewport against `section`'s edges.
#[must_use]
pub fn edge_state(section: &SectionBounds, viewport: &Viewport, tolerance: SnapTolerance) -> EdgeState {
    if section.is_short(viewport.height) {
        let from_top = (viewport.scroll_top - section.top).abs();
        let from_bottom = (viewport.bottom() - section.bottom()).abs();
        EdgeState { at_top: from_top <= tolerance.short_edge_px, at_bottom: from_bottom <= tolerance.short_edge_px }
    } else {
        let progress = (viewport.scroll_top - section.top).max(0.0);
        let scrollable = section.height - viewport.height;
        EdgeState {
            at_top: progress <= tolerance.tall_edge_px,
            at_bottom: progress >= scrollable - tolerance.tall_edge_px,
        }
    }
}

/// A programmatic scroll the host should perform.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapTarget {
    /// Index of the destination section.
    pub index: usize,
    /// Scroll offset to animate to.
    pub scroll_top: f64,
    pub direction: Direction,
}

/// Stateless snap decision for one gesture.
#[must_use]
pub fn propose(config: &SnapConfig, layout: &SectionLayout, viewport: &Viewport, gesture: Gesture) -> Option<SnapTarget> {
    if !gesture.passes_gate(config, viewport) {
        return None;
    }
    let direction = gesture.direction()?;
    let current_index = layout.containing(viewport.scroll_top, config.locate_offset_px)?;
    let current = layout.get(current_index)?;
    let edges = edge_state(current, viewport, gesture.tolerance(config));

    match direction {
        Direction::Down if edges.at_bottom => {
            let index = current_index + 1;
            let next = layout.get(index)?;
            Some(SnapTarget { index, scroll_top: next.top, direction })
        }
        Direction::Up if edges.at_top => {
            let index = current_index.checked_sub(1)?;
            let prev = layout.get(index)?;
            let scroll_top =
                if prev.is_short(viewport.height) { prev.top } else { prev.bottom_aligned_top(viewport.height) };
            Some(SnapTarget { index, scroll_top, direction })
        }
        _ => None,
    }
}

/// Snap decisions plus the in-flight guard.
#[derive(Debug, Clone)]
pub struct SnapPlanner {
    config: SnapConfig,
    cooldown_until_ms: Option<f64>,
}

impl SnapPlanner {
    #[must_use]
    pub fn new(config: SnapConfig) -> Self {
        Self { config, cooldown_until_ms: None }
    }

    #[must_use]
    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Whether a programmatic snap is still considered in flight at `now_ms`.
    #[must_use]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.cooldown_until_ms.is_some_and(|until| now_ms < until)
    }

    /// Decide whether `gesture` snaps, starting the cooldown when it does.
    pub fn plan(&mut self, layout: &SectionLayout, viewport: &Viewport, gesture: Gesture, now_ms: f64) -> Option<SnapTarget> {
        if self.is_animating(now_ms) {
            return None;
        }
        let target = propose(&self.config, layout, viewport, gesture)?;
        self.cooldown_until_ms = Some(now_ms + self.config.cooldown_ms);
        log::debug!(
            "snap {:?} to section {} at {:.0}px",
            target.direction,
            target.index,
            target.scroll_top
        );
        Some(target)
    }
}

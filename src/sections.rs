//! Page section geometry and active-section lookup.
//!
//! A [`SectionLayout`] is a snapshot of every `section[id]` in document
//! order, sampled from `offsetTop` / `offsetHeight`. Both active-section
//! highlighting and the snap planner work from the same snapshot.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

/// Window scroll position and size at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_top: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.scroll_top + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether the section fits inside a viewport of `viewport_height`.
    #[must_use]
    pub fn is_short(&self, viewport_height: f64) -> bool {
        self.height <= viewport_height
    }

    /// Scroll offset that aligns the section's bottom with the viewport's.
    #[must_use]
    pub fn bottom_aligned_top(&self, viewport_height: f64) -> f64 {
        self.bottom() - viewport_height
    }
}

/// Ordered, non-overlapping page sections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionLayout {
    sections: Vec<SectionBounds>,
}

impl SectionLayout {
    #[must_use]
    pub fn new(sections: Vec<SectionBounds>) -> Self {
        Self { sections }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SectionBounds> {
        self.sections.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionBounds> {
        self.sections.iter()
    }

    /// Index of the first section holding `scroll_top` once every section is
    /// shifted up by `look_ahead`.
    ///
    /// Section `i` matches when `top - look_ahead <= scroll_top < bottom - look_ahead`.
    #[must_use]
    pub fn containing(&self, scroll_top: f64, look_ahead: f64) -> Option<usize> {
        self.sections.iter().position(|section| {
            let top = section.top - look_ahead;
            scroll_top >= top && scroll_top < top + section.height
        })
    }

    /// Id of the section to highlight at `scroll_top`.
    #[must_use]
    pub fn active_id(&self, scroll_top: f64, look_ahead: f64) -> Option<&str> {
        self.containing(scroll_top, look_ahead)
            .map(|index| self.sections[index].id.as_str())
    }
}

/// Whether the navbar should carry the `scrolled` class.
#[must_use]
pub fn navbar_scrolled(scroll_top: f64, threshold: f64) -> bool {
    scroll_top > threshold
}

/// Section id named by an in-page anchor, e.g. `"#about"` → `"about"`.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

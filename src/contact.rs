//! Contact link click logging.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt;

/// Which channel a contact link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Email,
    Github,
    Linkedin,
    Twitter,
    Other,
}

impl LinkKind {
    /// Classify by scheme or host substring, first match wins.
    #[must_use]
    pub fn classify(href: &str) -> Self {
        if href.contains("mailto:") {
            Self::Email
        } else if href.contains("github.com") {
            Self::Github
        } else if href.contains("linkedin.com") {
            Self::Linkedin
        } else if href.contains("twitter.com") {
            Self::Twitter
        } else {
            Self::Other
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "hydrate")]
pub use browser::ContactTracker;

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_events::EventListener;

    use super::LinkKind;
    use crate::consts::CONTACT_LINK_SELECTOR;
    use crate::error::PortfolioError;
    use crate::util::dom;

    pub struct ContactTracker {
        _listeners: Vec<EventListener>,
    }

    impl ContactTracker {
        pub fn mount() -> Result<Self, PortfolioError> {
            let document = dom::document()?;
            let listeners = dom::query_all(&document, CONTACT_LINK_SELECTOR)?
                .into_iter()
                .map(|link| {
                    let kind = LinkKind::classify(&link.get_attribute("href").unwrap_or_default());
                    EventListener::new(&link, "click", move |_| log::info!("contact link clicked: {kind}"))
                })
                .collect();
            Ok(Self { _listeners: listeners })
        }
    }
}

//! Key/value preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme is the only persisted value. `localStorage` can be missing or
//! throw (private browsing, disabled storage, quota), so callers go through
//! [`PreferenceStore`] and fall back to [`MemoryStore`] for the session when
//! the browser store cannot be opened.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use crate::error::PortfolioError;

pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    fn save(&mut self, key: &str, value: &str) -> Result<(), PortfolioError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PortfolioError> {
        (**self).save(key, value)
    }
}

/// Session-only store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PortfolioError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(feature = "hydrate")]
pub struct BrowserStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl BrowserStore {
    pub fn open() -> Result<Self, PortfolioError> {
        let window = web_sys::window().ok_or_else(|| PortfolioError::Storage("no window".into()))?;
        let storage = window
            .local_storage()?
            .ok_or_else(|| PortfolioError::Storage("localStorage disabled".into()))?;
        Ok(Self { storage })
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).unwrap_or(None)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PortfolioError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| PortfolioError::Storage(format!("{err:?}")))
    }
}

/// Open `localStorage`, or a memory store when it is unavailable.
#[cfg(feature = "hydrate")]
pub fn open_preference_store() -> Box<dyn PreferenceStore> {
    match BrowserStore::open() {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::warn!("{err}; preferences will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

//! Error type shared by every manager's mount path.
//!
//! Nothing here is ever fatal to the page: `app::boot` logs a failed mount
//! and carries on with the remaining managers.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },
    #[error("preference storage unavailable: {0}")]
    Storage(String),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl PortfolioError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement { selector: selector.into() }
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for PortfolioError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

//! Error type for installing site units.
//!
//! ERROR HANDLING
//! ==============
//! Missing page elements are not errors: each unit checks for its elements
//! and quietly does nothing. `SiteError` covers the failures that remain,
//! mostly exceptions thrown back through `web-sys` calls.

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

//! Crate error type.

use wasm_bindgen::JsValue;

/// Error returned by drawing routines and configuration parsing.
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    /// The underlying drawing surface rejected a call.
    #[error("surface call failed: {0}")]
    Surface(String),
    /// The toggle configuration could not be parsed.
    #[error("invalid toggle configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// A button named a toggle that does not exist.
    #[error("unknown toggle: {0}")]
    UnknownToggle(String),
}

impl From<JsValue> for DrawError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Surface(message)
    }
}

impl From<DrawError> for JsValue {
    fn from(err: DrawError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

//! Shared helpers for WASM API operations
//!
//! Serialization across the JS boundary and error conversion. Logging goes
//! through the `log` facade, which `console_log` routes to the browser
//! console.

use serde::Serialize;
use std::fmt::Display;
use wasm_bindgen::prelude::*;

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| js_error(error_context, e))
}

/// Log an error and convert it to a JS string value
pub fn js_error(context: &str, err: impl Display) -> JsValue {
    let msg = format!("{}: {}", context, err);
    log::error!("[WASM] {}", msg);
    JsValue::from_str(&msg)
}

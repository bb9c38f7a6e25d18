//! Shared helpers for WASM API operations
//!
//! Console logging, JS value (de)serialization, and the conversion from
//! `ChartError` to the `JsValue` errors JavaScript sees.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ChartError;
use crate::structure::ClassifierConfig;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// Console output, each line prefixed with `[WASM]`

/// Log a debug message
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

/// Read a value passed in from JS, reporting failures as `ChartError::Deserialize`
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| ChartError::Deserialize(format!("{}: {}", error_context, e)).into())
}

/// Convert a result for JS, reporting failures as `ChartError::Serialize`
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| ChartError::Serialize(format!("{}: {}", error_context, e)).into())
}

/// Read optional classifier settings; `undefined` and `null` mean defaults
pub fn classifier_config(value: JsValue) -> Result<ClassifierConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(ClassifierConfig::default());
    }

    let config: ClassifierConfig = deserialize(value, "Failed to deserialize classifier config")?;
    config.validate()?;
    Ok(config)
}

/// Treat `undefined`, `null` and `""` from JS as "no value"
pub fn optional_string(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

// Every error crossing into JS is logged once here
impl From<ChartError> for JsValue {
    fn from(err: ChartError) -> Self {
        let msg = err.to_string();
        crate::wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    }
}

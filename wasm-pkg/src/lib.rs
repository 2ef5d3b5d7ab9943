//! Experiment Showcase browser build
//!
//! WebAssembly package wrapping the dashboard shell for the front-end.

use wasm_bindgen::prelude::*;

// Re-export main types from parent crate
pub use experiment_showcase::wasm::*;

/// Get demo version
#[wasm_bindgen]
pub fn demo_version() -> String {
    format!("experiment-showcase-wasm v{}", env!("CARGO_PKG_VERSION"))
}

/// Built-in metric insights as a JSON string.
#[wasm_bindgen]
pub fn metric_insights_json() -> Result<String, JsValue> {
    serde_json::to_string(experiment_showcase::insights::metric_insights())
        .map_err(|e| JsValue::from_str(&format!("JSON error: {e}")))
}

/// Built-in metrics comparison table as a JSON string.
#[wasm_bindgen]
pub fn metric_comparisons_json() -> Result<String, JsValue> {
    serde_json::to_string(experiment_showcase::fixtures::metric_comparisons())
        .map_err(|e| JsValue::from_str(&format!("JSON error: {e}")))
}

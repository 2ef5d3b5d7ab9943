//! WebAssembly bindings for browser deployment.
//!
//! Exposes the dashboard shell to JavaScript. Structured values cross the
//! boundary as plain JS objects via `serde-wasm-bindgen`.
//!
//! # Architecture
//!
//! ```text
//! Browser JS → wasm-bindgen → WasmDashboard → Dashboard → filter / stats / recommend
//!                                                  ↓
//!                                         DashboardView (JS object)
//! ```
//!
//! The browser owns the event loop, so refresh is split into
//! `beginRefresh` / `finishRefresh` around a JS `setTimeout`.

#![cfg(target_arch = "wasm32")]

use std::fmt::Display;

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::config::DashboardConfig;
use crate::dashboard::{Dashboard, DashboardState, Tab};
use crate::query::FilterCriteria;
use crate::recommend::{recommend, Area, Goal};

/// Initialize WASM module with panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"experiment-showcase WASM initialized".into());
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn js_error(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(js_error)
}

/// Stateless recommendation, for the standalone recommender form.
#[wasm_bindgen(js_name = recommend)]
pub fn recommend_js(description: &str, area: &str, goal: &str) -> Result<JsValue, JsValue> {
    let area: Area = area.parse().map_err(js_error)?;
    let goal: Goal = goal.parse().map_err(js_error)?;
    to_js(&recommend(description, area, goal))
}

/// Dashboard shell handle owned by JavaScript.
#[wasm_bindgen]
pub struct WasmDashboard {
    inner: Dashboard,
}

#[wasm_bindgen]
impl WasmDashboard {
    /// Create a dashboard over the built-in datasets.
    ///
    /// `config` is an optional JS object with `experimentHost`,
    /// `refreshDelayMs` and `initialTab`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmDashboard, JsValue> {
        let config: DashboardConfig = if config.is_undefined() || config.is_null() {
            DashboardConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(js_error)?
        };
        console::log_1(&format!("Dashboard created on tab: {}", config.initial_tab).into());
        Ok(Self {
            inner: Dashboard::builder().config(config).build(),
        })
    }

    /// Current UI state as a JS object.
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.state())
    }

    /// Restore a previously saved UI state.
    #[wasm_bindgen(js_name = restoreState)]
    pub fn restore_state(&mut self, state: JsValue) -> Result<(), JsValue> {
        let state: DashboardState = serde_wasm_bindgen::from_value(state).map_err(js_error)?;
        self.inner.restore(state).map_err(js_error)
    }

    /// Switch to `my-experiments` or `fos-2026`.
    #[wasm_bindgen(js_name = selectTab)]
    pub fn select_tab(&mut self, tab: &str) -> Result<(), JsValue> {
        let tab: Tab = tab.parse().map_err(js_error)?;
        self.inner.select_tab(tab);
        Ok(())
    }

    /// Open the detail overlay.
    #[wasm_bindgen(js_name = openDetail)]
    pub fn open_detail(&mut self, identifier: &str) -> Result<(), JsValue> {
        self.inner.open_detail(identifier).map_err(js_error)
    }

    /// Close the detail overlay.
    #[wasm_bindgen(js_name = closeDetail)]
    pub fn close_detail(&mut self) {
        self.inner.close_detail();
    }

    /// Replace the filter bar from a JS object (`search`, `status`, `businessUnit`, `sortBy`).
    #[wasm_bindgen(js_name = setFilters)]
    pub fn set_filters(&mut self, filters: JsValue) -> Result<(), JsValue> {
        let filters: FilterCriteria = serde_wasm_bindgen::from_value(filters).map_err(js_error)?;
        self.inner.set_filters(filters);
        Ok(())
    }

    /// Reset the filter bar.
    #[wasm_bindgen(js_name = clearFilters)]
    pub fn clear_filters(&mut self) {
        self.inner.clear_filters();
    }

    /// List page view model.
    #[wasm_bindgen]
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.view())
    }

    /// Detail overlay view model, or `null` when closed.
    #[wasm_bindgen]
    pub fn detail(&self) -> Result<JsValue, JsValue> {
        match self.inner.detail().map_err(js_error)? {
            Some(detail) => to_js(&detail),
            None => Ok(JsValue::NULL),
        }
    }

    /// Recommendation form submit; rejects a blank description.
    #[wasm_bindgen(js_name = requestRecommendation)]
    pub fn request_recommendation(
        &self,
        description: &str,
        area: &str,
        goal: &str,
    ) -> Result<JsValue, JsValue> {
        let area: Area = area.parse().map_err(js_error)?;
        let goal: Goal = goal.parse().map_err(js_error)?;
        let recommendation = self
            .inner
            .request_recommendation(description, area, goal)
            .map_err(js_error)?;
        to_js(&recommendation)
    }

    /// Set the loading flag; pair with `finishRefresh` after `refreshDelayMs`.
    #[wasm_bindgen(js_name = beginRefresh)]
    pub fn begin_refresh(&mut self) -> u32 {
        self.inner.begin_refresh();
        u32::try_from(self.inner.config().refresh_delay_ms).unwrap_or(u32::MAX)
    }

    /// Clear the loading flag.
    #[wasm_bindgen(js_name = finishRefresh)]
    pub fn finish_refresh(&mut self) {
        self.inner.finish_refresh();
    }
}

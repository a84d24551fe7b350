//! Runtime configuration injected by the page that serves the bundle.
//!
//! The backend location is looked up, in order, from:
//!
//! ```javascript
//! window.__GRID_DASHBOARD_CONFIG__ = { api_base: "http://grid.local:5000" };
//! ```
//!
//! ```html
//! <meta name="grid-dashboard:api-url" content="http://grid.local:5000">
//! ```
//!
//! and falls back to the serving origin.

use js_sys::Reflect;
use log::info;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__GRID_DASHBOARD_CONFIG__";
const API_URL_META: &str = "grid-dashboard:api-url";

/// Where the solver backend lives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardConfig {
	/// Base URL without a trailing slash; empty means same origin.
	pub api_base: String,
}

impl DashboardConfig {
	/// Creates a config for `api_base`, dropping trailing slashes.
	pub fn new(api_base: impl Into<String>) -> Self {
		let api_base: String = api_base.into();
		Self {
			api_base: api_base.trim().trim_end_matches('/').to_owned(),
		}
	}

	/// Reads the config from the current page.
	pub fn from_page() -> Self {
		let config = Self::new(global_api_base().or_else(meta_api_base).unwrap_or_default());
		if config.api_base.is_empty() {
			info!("solver backend: same origin");
		} else {
			info!("solver backend: {}", config.api_base);
		}
		config
	}

	/// Absolute or origin-relative URL of a backend route.
	pub fn endpoint(&self, path: &str) -> String {
		format!("{}/{}", self.api_base, path.trim_start_matches('/'))
	}
}

fn global_api_base() -> Option<String> {
	let window = web_sys::window()?;
	let config = Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
	if config.is_undefined() || config.is_null() {
		return None;
	}
	Reflect::get(&config, &JsValue::from_str("api_base"))
		.ok()?
		.as_string()
}

fn meta_api_base() -> Option<String> {
	let document = web_sys::window()?.document()?;
	document
		.query_selector(&format!("meta[name=\"{API_URL_META}\"]"))
		.ok()??
		.get_attribute("content")
}

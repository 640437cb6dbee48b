//! Backend location.
//!
//! The origin is resolved in order from a `window.CAMPAIGN_API_URL` global
//! (set by the hosting page), the `CAMPAIGN_API_URL` variable at build time,
//! and finally same-origin. All endpoints live under the `/api` prefix.

use js_sys::Reflect;
use wasm_bindgen::JsValue;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const API_PREFIX: &str = "/api";
const ORIGIN_KEY: &str = "CAMPAIGN_API_URL";

/// Base URL every API path is appended to, e.g. `https://host/api`.
pub fn api_base() -> String {
    let origin = runtime_origin()
        .or_else(|| option_env!("CAMPAIGN_API_URL").map(str::to_string))
        .unwrap_or_default();
    join_base(&origin)
}

fn runtime_origin() -> Option<String> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str(ORIGIN_KEY))
        .ok()?
        .as_string()
        .filter(|s| !s.trim().is_empty())
}

/// Appends the API prefix to `origin`, dropping trailing slashes.
pub fn join_base(origin: &str) -> String {
    format!("{}{}", origin.trim().trim_end_matches('/'), API_PREFIX)
}

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

// Expects an optional global object such as
// window.__GSO_ENV = { API_BASE_URL: "..." } (or lower-case key).
fn read_global_base_url(global: &str) -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &global.into()).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let object = js_sys::Object::from(value);
    ["API_BASE_URL", "api_base_url"].iter().find_map(|key| {
        js_sys::Reflect::get(&object, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn snapshot_from_globals() -> Option<String> {
    // env.js wins over a previously cached window config.
    read_global_base_url("__GSO_ENV").or_else(|| read_global_base_url("__GSO_CONFIG"))
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

fn write_window_config(cfg: &RuntimeConfig) {
    let url = match &cfg.api_base_url {
        Some(url) => url,
        None => return,
    };
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let object = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &object,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&window, &"__GSO_CONFIG".into(), &object);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    log::warn!(
        "No runtime config found, falling back to {}",
        DEFAULT_API_BASE_URL
    );
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}

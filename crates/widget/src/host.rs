use replybot_core::WidgetConfig;
use wasm_bindgen::JsValue;

/// Host-page global consulted for the API base, e.g.
/// `window.API_BASE = "https://shop.example/api"`.
const API_BASE_GLOBAL: &str = "API_BASE";

/// Reads the widget configuration published by the host page.
///
/// An absent, non-string, or blank global falls back to the default
/// loopback base.
pub fn host_config() -> WidgetConfig {
    let Some(window) = web_sys::window() else {
        return WidgetConfig::default();
    };

    let value = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(API_BASE_GLOBAL)).ok();
    match value.as_ref().and_then(JsValue::as_string) {
        Some(base) if !base.trim().is_empty() => WidgetConfig::new(base),
        _ => WidgetConfig::default(),
    }
}

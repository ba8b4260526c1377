//! Wall clock

use wasm_bindgen::JsValue;

/// Current time in epoch milliseconds
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Epoch milliseconds rendered in the browser's locale
pub fn format_local_time(epoch_ms: i64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(epoch_ms as f64));
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}

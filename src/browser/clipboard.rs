//! Clipboard and alert helpers

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::js_error;

/// Writes `text` via `navigator.clipboard.writeText`
pub async fn write_clipboard_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .map_err(|e| js_error(&e))?;
    if clipboard.is_undefined() {
        return Err("clipboard API not available".to_string());
    }
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| js_error(&e))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| "clipboard.writeText is not a function".to_string())?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| js_error(&e))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| "clipboard.writeText did not return a promise".to_string())?;
    JsFuture::from(promise).await.map_err(|e| js_error(&e))?;
    Ok(())
}

/// Blocking browser alert; ignored when no window exists
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

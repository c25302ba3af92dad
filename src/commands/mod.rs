//! Backend Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain. Two shells
//! can host the UI: pywebview exposes `window.pywebview.api.<command>`
//! (positional arguments), Tauri exposes `window.__TAURI__.core.invoke`
//! (named arguments).

mod gathering;

use js_sys::{Function, Promise};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Encode IPC arguments; maps become plain objects, not JS `Map`s
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

/// Readable text for a rejected call
fn js_error(err: JsValue) -> String {
    let error_message = err.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message()));
    rejection_text(err.as_string(), error_message, || format!("{:?}", err))
}

/// Prefer a thrown string, then an `Error`'s message, then the debug text
fn rejection_text(
    text: Option<String>,
    error_message: Option<String>,
    debug: impl FnOnce() -> String,
) -> String {
    text.or(error_message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(debug)
}

// ========================
// Shell Detection
// ========================

fn lookup(target: &JsValue, key: &str) -> Option<JsValue> {
    if !target.is_object() {
        return None;
    }
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// Walk `window.<path>`
fn resolve(path: &[&str]) -> Option<JsValue> {
    let window = JsValue::from(web_sys::window()?);
    path.iter().try_fold(window, |target, key| lookup(&target, key))
}

/// `window.pywebview.api` together with its `cmd` function, if exposed
fn pywebview_function(cmd: &str) -> Option<(JsValue, Function)> {
    let api = resolve(&["pywebview", "api"])?;
    let function = lookup(&api, cmd)?.dyn_into::<Function>().ok()?;
    Some((api, function))
}

/// Whether the pywebview object is injected, ready or not
pub fn pywebview_present() -> bool {
    resolve(&["pywebview"]).is_some()
}

/// Whether pywebview exposes `cmd`
pub fn pywebview_has(cmd: &str) -> bool {
    pywebview_function(cmd).is_some()
}

/// Whether Tauri IPC is injected
pub fn tauri_available() -> bool {
    resolve(&["__TAURI__", "core", "invoke"]).is_some_and(|invoke| invoke.is_function())
}

/// Call `window.pywebview.api[cmd](...args)` and await its promise
async fn call_pywebview(cmd: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
    let (api, function) = pywebview_function(cmd)
        .ok_or_else(|| JsValue::from_str(&format!("pywebview does not expose {}", cmd)))?;
    let returned = function.apply(&api, &args.iter().collect::<js_sys::Array>())?;
    JsFuture::from(Promise::resolve(&returned)).await
}

/// Call a no-argument command on whichever shell exposes it
async fn call(cmd: &str) -> Result<JsValue, JsValue> {
    if pywebview_has(cmd) {
        call_pywebview(cmd, &[]).await
    } else {
        invoke(cmd, JsValue::NULL).await
    }
}

// Re-export all public items
pub use gathering::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_text_prefers_thrown_string() {
        let text = rejection_text(Some("ipc closed".to_string()), Some("ignored".to_string()), || "debug".to_string());
        assert_eq!(text, "ipc closed");
    }

    #[test]
    fn test_rejection_text_uses_error_message() {
        let text = rejection_text(None, Some("command update_gathering_items not found".to_string()), || {
            "JsValue(Error: command update_gathering_items not found)".to_string()
        });
        assert_eq!(text, "command update_gathering_items not found");
    }

    #[test]
    fn test_rejection_text_falls_back_to_debug() {
        assert_eq!(rejection_text(None, None, || "JsValue(42)".to_string()), "JsValue(42)");
        assert_eq!(rejection_text(None, Some(String::new()), || "JsValue(Error)".to_string()), "JsValue(Error)");
    }
}

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlDocument, HtmlTextAreaElement, Window};

use super::js_err;
use crate::error::EffectsError;
use crate::host::{Clipboard, CopyDone};
use crate::platform::{copy_command_outcome, copy_path, CopyPath};

/// `navigator.clipboard.writeText`, or the hidden-textarea `execCommand`
/// copy where the async API is missing.
pub struct WebClipboard;

fn async_clipboard(window: &Window) -> Option<(JsValue, Function)> {
    let navigator = window.navigator();
    let clipboard = Reflect::get(&navigator, &"clipboard".into()).unwrap_or(JsValue::UNDEFINED);
    let has_clipboard = !clipboard.is_undefined() && !clipboard.is_null();
    let write = has_clipboard
        .then(|| Reflect::get(&clipboard, &"writeText".into()).ok())
        .flatten()
        .and_then(|w| w.dyn_into::<Function>().ok());

    match copy_path(has_clipboard, write.is_some()) {
        CopyPath::AsyncClipboard => write.map(|write| (clipboard, write)),
        CopyPath::CopyCommand => None,
    }
}

fn legacy_copy(window: &Window, text: &str) -> Result<(), EffectsError> {
    let document = window
        .document()
        .ok_or(EffectsError::MissingElement("document"))?;
    let body = document.body().ok_or(EffectsError::MissingElement("body"))?;

    let area = document
        .create_element("textarea")
        .map_err(js_err)?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| EffectsError::Dom("textarea is not an HTMLTextAreaElement".to_string()))?;
    area.set_value(text);
    let style = area.style();
    style.set_property("position", "fixed").map_err(js_err)?;
    style.set_property("left", "-999999px").map_err(js_err)?;

    body.append_child(&area).map_err(js_err)?;
    area.select();
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .ok_or_else(|| EffectsError::Clipboard("copy command unavailable".to_string()))
        .and_then(|html| copy_command_outcome(html.exec_command("copy")));
    body.remove_child(&area).map_err(js_err)?;
    copied
}

impl Clipboard for WebClipboard {
    fn write_text(&self, text: &str, done: CopyDone) {
        let Some(window) = web_sys::window() else {
            done(Err(EffectsError::MissingElement("window")));
            return;
        };

        let Some((clipboard, write)) = async_clipboard(&window) else {
            done(legacy_copy(&window, text));
            return;
        };

        let pending = write
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|e| EffectsError::Clipboard(format!("{:?}", e)))
            .and_then(|value| {
                value
                    .dyn_into::<Promise>()
                    .map_err(|_| EffectsError::Clipboard("writeText did not return a promise".to_string()))
            });
        match pending {
            Ok(promise) => spawn_local(async move {
                let result = JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|e| EffectsError::Clipboard(format!("{:?}", e)));
                done(result);
            }),
            Err(e) => done(Err(e)),
        }
    }
}

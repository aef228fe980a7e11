//! Browser binding: `Host` over `web_sys`, plus the wasm entry points.

mod clipboard;
mod component;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::config::EffectsConfig;
use crate::effects::{self, SharedRng};
use crate::error::EffectsError;
use crate::host::{Callback, Handler, Host, IntersectionHandler, Node, ObserverOptions, Rect};
use crate::platform::{readiness, Readiness};

pub use clipboard::WebClipboard;
pub use component::{PresentationEffects, PresentationEffectsProps};

pub(crate) fn js_err(e: JsValue) -> EffectsError {
    EffectsError::Dom(format!("{:?}", e))
}

#[derive(Clone)]
pub struct WebNode(Element);

impl WebNode {
    fn html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }
}

impl Node for WebNode {
    fn set_style(&self, property: &str, value: &str) {
        match self.html() {
            Some(el) => {
                if let Err(e) = el.style().set_property(property, value) {
                    log::warn!("Failed to set {}: {:?}", property, e);
                }
            }
            None => log::warn!("Cannot style non-HTML element <{}>", self.0.tag_name()),
        }
    }

    fn add_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().add_1(class) {
            log::warn!("Failed to add class {}: {:?}", class, e);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().remove_1(class) {
            log::warn!("Failed to remove class {}: {:?}", class, e);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn rect(&self) -> Rect {
        let rect = self.0.get_bounding_client_rect();
        Rect {
            top: rect.top(),
            bottom: rect.bottom(),
            height: rect.height(),
        }
    }

    fn find(&self, selector: &str) -> Option<Self> {
        self.0.query_selector(selector).ok().flatten().map(WebNode)
    }

    fn reflow(&self) {
        if let Some(el) = self.html() {
            let _ = el.offset_width();
        }
    }
}

pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn listen(&self, target: &Element, event: &str, handler: Handler) {
        let callback = Closure::<dyn FnMut()>::wrap(handler);
        if let Err(e) = target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to listen for {}: {:?}", event, e);
        }
        // lives as long as the page
        callback.forget();
    }
}

impl Host for WebHost {
    type Node = WebNode;

    fn query(&self, selector: &str) -> Option<WebNode> {
        self.document.query_selector(selector).ok().flatten().map(WebNode)
    }

    fn query_all(&self, selector: &str) -> Vec<WebNode> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebNode)
            .collect()
    }

    fn root(&self) -> Option<WebNode> {
        self.document.document_element().map(WebNode)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_top(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn create_child(&self, parent: &WebNode, tag: &str, class: &str) -> Result<WebNode, EffectsError> {
        let child = self.document.create_element(tag).map_err(js_err)?;
        child.set_class_name(class);
        parent.0.append_child(&child).map_err(js_err)?;
        Ok(WebNode(child))
    }

    fn style_rule(&self, id: &str) -> Result<WebNode, EffectsError> {
        if let Some(existing) = self.document.get_element_by_id(id) {
            return Ok(WebNode(existing));
        }
        let head = self
            .document
            .head()
            .ok_or(EffectsError::MissingElement("head"))?;
        let style = self.document.create_element("style").map_err(js_err)?;
        style.set_id(id);
        head.append_child(&style).map_err(js_err)?;
        Ok(WebNode(style))
    }

    fn set_timeout(&self, delay_ms: u32, callback: Callback) {
        gloo_timers::callback::Timeout::new(delay_ms, callback).forget();
    }

    fn on_scroll(&self, handler: Handler) {
        let callback = Closure::<dyn FnMut()>::wrap(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(e) = self
            .window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            )
        {
            log::warn!("Failed to listen for scroll: {:?}", e);
        }
        callback.forget();
    }

    fn observe(&self, target: &WebNode, options: ObserverOptions, mut handler: IntersectionHandler) {
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                handler(entry.is_intersecting());
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer.observe(&target.0),
            Err(e) => log::warn!("Failed to create intersection observer: {:?}", e),
        }
        callback.forget();
    }

    fn on_pointer_enter(&self, target: &WebNode, handler: Handler) {
        self.listen(&target.0, "mouseenter", handler);
    }

    fn on_click(&self, target: &WebNode, mut handler: Handler) {
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            event.stop_propagation();
            handler();
        });
        if let Err(e) = target
            .0
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to listen for click: {:?}", e);
        }
        callback.forget();
    }
}

fn install_page(window: Window, document: Document, config: &EffectsConfig) {
    let host = Rc::new(WebHost::new(window, document));
    let rng: SharedRng = Rc::new(RefCell::new(StdRng::from_entropy()));
    effects::install_all(&host, config, Rc::new(WebClipboard), rng);
}

/// Installs the effects now, or on `DOMContentLoaded` while the document is
/// still parsing.
pub fn boot(config: EffectsConfig) -> Result<(), EffectsError> {
    let window = web_sys::window().ok_or(EffectsError::MissingElement("window"))?;
    let document = window
        .document()
        .ok_or(EffectsError::MissingElement("document"))?;

    if readiness(&document.ready_state()) == Readiness::OnContentLoaded {
        let deferred = document.clone();
        let ready = Closure::once_into_js(move || install_page(window, deferred, &config));
        document
            .add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref())
            .map_err(js_err)?;
    } else {
        install_page(window, document, &config);
    }
    Ok(())
}

static LOGGER: Once = Once::new();

/// Standalone pages have no logger of their own; yew apps bring theirs.
fn init_logging() {
    LOGGER.call_once(|| wasm_logger::init(wasm_logger::Config::default()));
}

/// Installs with the default timings.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    init_logging();
    boot(EffectsConfig::default()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Installs with a JSON config, e.g. `{"scrambleDurationMs": 400}`.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(config: &str) -> Result<(), JsValue> {
    init_logging();
    let config = EffectsConfig::from_json(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    boot(config).map_err(|e| JsValue::from_str(&e.to_string()))
}

//! Browser glue shared by every unit: element lookup and listener wiring.
//!
//! Lookups never fail loudly. An invalid selector or an absent element both
//! come back as "nothing found" so the calling unit can short-circuit.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, NodeList, Window};

use crate::error::SiteError;

/// The global window.
pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

/// The window's document.
pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// Something selectors can be run against: the document or an element.
pub trait Scope {
    fn select_one(&self, selector: &str) -> Result<Option<Element>, JsValue>;
    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue>;
}

impl Scope for Document {
    fn select_one(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl Scope for Element {
    fn select_one(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }

    fn select_all(&self, selector: &str) -> Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

/// First element under `scope` matching `selector`.
pub fn qs(scope: &impl Scope, selector: &str) -> Option<Element> {
    match scope.select_one(selector) {
        Ok(found) => found,
        Err(err) => {
            log::debug!("querySelector({selector}) rejected: {err:?}");
            None
        }
    }
}

/// Every element under `scope` matching `selector`, in document order.
pub fn qsa(scope: &impl Scope, selector: &str) -> Vec<Element> {
    let list = match scope.select_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::debug!("querySelectorAll({selector}) rejected: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Attach a listener that lives for the rest of the page.
pub fn on<E, F>(target: &impl AsRef<EventTarget>, event: &str, handler: F) -> Result<(), SiteError>
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target
        .as_ref()
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Current viewport width in CSS pixels.
pub fn inner_width(window: &Window) -> f64 {
    match window.inner_width() {
        Ok(value) => value.as_f64().unwrap_or(0.0),
        Err(err) => {
            log::warn!("innerWidth unavailable: {err:?}");
            0.0
        }
    }
}

/// Whether the media `query` currently matches.
pub fn media_matches(window: &Window, query: &str) -> bool {
    match window.match_media(query) {
        Ok(Some(list)) => list.matches(),
        Ok(None) => false,
        Err(err) => {
            log::debug!("matchMedia({query}) rejected: {err:?}");
            false
        }
    }
}

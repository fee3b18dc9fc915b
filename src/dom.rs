use crate::config::dom_is_parsed;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `window.innerWidth` in CSS px, 0 if unavailable.
#[inline]
pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn query_html_element(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<Option<web::HtmlElement>> {
    let el = document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("bad selector '{}': {:?}", selector, e))?;
    match el {
        Some(el) => el
            .dyn_into::<web::HtmlElement>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("'{}' is not an HtmlElement: {:?}", selector, e)),
        None => Ok(None),
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Register a listener on `target` that lives for the rest of the page.
pub fn add_listener<E>(
    target: &web::EventTarget,
    event: &str,
    passive: bool,
    handler: impl FnMut(E) + 'static,
) where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(passive);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

pub fn add_window_listener<E>(event: &str, passive: bool, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    if let Some(window) = web::window() {
        add_listener(&window, event, passive, handler);
    }
}

pub fn add_document_listener<E>(event: &str, passive: bool, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    if let Some(document) = window_document() {
        add_listener(&document, event, passive, handler);
    }
}

/// Run `f` once the DOM is parsed (immediately if it already is).
pub fn on_dom_ready(f: impl FnOnce() + 'static) {
    let Some(document) = window_document() else {
        return;
    };
    if dom_is_parsed(&document.ready_state()) {
        f();
        return;
    }
    let closure: Closure<dyn FnMut()> = Closure::once(f);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

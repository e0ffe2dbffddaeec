use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Attach `handler` to `event` on the target. The closure lives for the page.
pub fn listen<T>(target: &web::EventTarget, event: &str, handler: impl FnMut(T) + 'static)
where
    T: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(T)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Every element matching `selector`, in document order. Invalid selectors
/// yield nothing.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// One-shot timer; returns the handle for `clear_timeout_with_handle`.
pub fn set_timeout(window: &web::Window, delay_ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
        .ok()
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

/// Client size of the container in CSS pixels.
#[inline]
pub fn client_size(el: &web::Element) -> (u32, u32) {
    (el.client_width().max(0) as u32, el.client_height().max(0) as u32)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, css: (u32, u32), backing: (u32, u32)) {
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css.0));
    _ = style.set_property("height", &format!("{}px", css.1));
    canvas.set_width(backing.0.max(1));
    canvas.set_height(backing.1.max(1));
}

use crate::constants::{
    CARD_REVEAL_SELECTOR, DISPLAY_SECTION_ID, SECTION_REVEAL_SELECTOR, VISIBLE_CLASS,
};
use crate::dom;
use crate::state::SharedPage;
use nexus_core::constants::{
    CARD_REVEAL_ROOT_MARGIN, CARD_REVEAL_THRESHOLD, SECTION_HIDDEN_TRANSFORM,
    SECTION_REVEAL_THRESHOLD, SECTION_SHOWN_TRANSFORM, SECTION_TRANSITION,
};
use nexus_core::input::{display_tilt, scroll_progress};
use nexus_core::RigKind;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn wire_scroll(window: &web::Window, document: &web::Document, page: &SharedPage) {
    let win = window.clone();
    let doc = document.clone();
    let page = page.clone();
    dom::listen(window, "scroll", move |_: web::Event| {
        let viewport_h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        let scroll_height = doc
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);

        let mut page = page.borrow_mut();
        page.scroll_progress = scroll_progress(scroll_y, scroll_height, viewport_h);

        let has_phone = page
            .rig(RigKind::Display)
            .map(|r| r.state.phone.is_some())
            .unwrap_or(false);
        if !has_phone {
            return;
        }
        if let Some(section) = doc.get_element_by_id(DISPLAY_SECTION_ID) {
            let top = section.get_bounding_client_rect().top();
            if let Some(tilt) = display_tilt(top, viewport_h) {
                page.display_tilt = Some(tilt);
            }
        }
    });
}

/// Observe `targets` and run `on_enter` once for each that starts intersecting.
fn observe(
    targets: &[web::Element],
    options: &web::IntersectionObserverInit,
    on_enter: impl Fn(&web::Element) + 'static,
) {
    if targets.is_empty() {
        return;
    }
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: web::IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                on_enter(&entry.target());
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let Ok(observer) =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)
    else {
        return;
    };
    callback.forget();
    for target in targets {
        observer.observe(target);
    }
}

/// Cards get the `visible` class; section headers fade and slide in.
pub fn wire_reveals(document: &web::Document) {
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(CARD_REVEAL_THRESHOLD));
    options.set_root_margin(CARD_REVEAL_ROOT_MARGIN);
    observe(&dom::query_all(document, CARD_REVEAL_SELECTOR), &options, |el| {
        _ = el.class_list().add_1(VISIBLE_CLASS);
    });

    let sections = dom::query_all(document, SECTION_REVEAL_SELECTOR);
    for section in &sections {
        dom::set_style(section, "opacity", "0");
        dom::set_style(section, "transform", SECTION_HIDDEN_TRANSFORM);
        dom::set_style(section, "transition", SECTION_TRANSITION);
    }
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(SECTION_REVEAL_THRESHOLD));
    observe(&sections, &options, |el| {
        dom::set_style(el, "opacity", "1");
        dom::set_style(el, "transform", SECTION_SHOWN_TRANSFORM);
    });
}
